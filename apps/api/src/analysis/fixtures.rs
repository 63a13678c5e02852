//! Posting fixtures shared by the analysis tests.

pub const LEGIT_POSTING: &str = "Senior Data Analyst at Northwind Analytics. \
    The company is located in Denver and the role reports to the Director of Finance. \
    Salary range: $60,000–$75,000 per year plus health insurance, dental, vision and a 401(k) match. \
    Requirements include 3+ years of experience with SQL and Tableau and a bachelor's degree in statistics. \
    Required qualifications: proficient in Excel, knowledge of forecasting and strong communication skills. \
    To apply, submit your resume and cover letter through our careers page or email jobs@northwind-analytics.com. \
    Our recruiter will reply within five business days and the interview process has two rounds. \
    Expected start date is March 1.";

pub const GHOST_POSTING: &str = "URGENT!!! we are always hiring passionate rockstar ninjas. \
    easy money, immediate start, act now! various duties and other stuff as needed. \
    guaranteed income, don't miss out, only a few spots left!!";

/// Free-mail contact plus three urgent phrases.
pub const URGENT_FREEMAIL_POSTING: &str = "Urgent opening for a data entry clerk. \
    Immediate start with easy money for the right person. \
    Send your details to quickhire.jobs@gmail.com today.";
