//! Byline provider: a fixed practice profile and the formatted summary
//! text derived from it.
//!
//! All fields are process-lifetime constants, so the byline is stable for
//! the life of the process: every call returns the same string.

use crate::domain::models::{BylineReport, ScoreStats};
use crate::services::speech;
use crate::services::stats::{self, StatsError};

pub struct Practice {
    pub has_international_clients: bool,
    pub located_in_usa: bool,
    pub years_in_operation: u32,
    pub number_of_students: u32,
    pub average_client_satisfaction: f64,
    pub average_grade_point: f64,
    pub skills_offered: &'static [&'static str],
    pub choice_in_analytics: &'static [&'static str],
    pub client_satisfaction_scores: &'static [f64],
    pub student_grades: &'static [f64],
}

pub const PRACTICE: Practice = Practice {
    has_international_clients: true,
    located_in_usa: false,
    years_in_operation: 10,
    number_of_students: 425,
    average_client_satisfaction: 4.7,
    average_grade_point: 3.8,
    skills_offered: &["Data Analysis", "Machine Learning", "Business Intelligence"],
    choice_in_analytics: &["Data Science", "Data Engineering", "Business Analytics"],
    client_satisfaction_scores: &[4.8, 4.6, 4.9, 5.0, 4.7],
    student_grades: &[3.9, 4.0, 3.7, 3.8, 4.0],
};

fn summarize(values: &[f64]) -> Result<ScoreStats, StatsError> {
    Ok(ScoreStats {
        min: stats::min(values),
        max: stats::max(values),
        mean: stats::mean(values),
        stdev: stats::sample_stdev(values)?,
    })
}

pub fn byline_report() -> anyhow::Result<BylineReport> {
    let grades = summarize(PRACTICE.student_grades)?;
    let scores = summarize(PRACTICE.client_satisfaction_scores)?;
    Ok(BylineReport {
        text: render(&PRACTICE, &grades, &scores),
        student_grades: grades,
        satisfaction_scores: scores,
    })
}

pub fn get_byline() -> anyhow::Result<String> {
    Ok(byline_report()?.text)
}

/// Renders the byline through the speech engine and blocks until playback
/// completes. Fails when no engine is installed; callers that do not need
/// audio simply never invoke this.
pub fn read_byline_aloud() -> anyhow::Result<()> {
    speech::speak(&get_byline()?)
}

fn render(p: &Practice, grades: &ScoreStats, scores: &ScoreStats) -> String {
    format!(
        "\n\
         ---------------------------------------------------------\n\
         Stellar Analytics: Delivering Professional Insights\n\
         ---------------------------------------------------------\n\
         Has International Clients:  {intl}\n\
         Located in USA:             {usa}\n\
         Choice in Analytics:        {choices:?}\n\
         Average Client Satisfaction: {avg_satisfaction}\n\
         Average Grade Point:        {gpa}\n\
         Number of Students:         {students}\n\
         Average Student Grade:      {grade_mean:.2}\n\
         Minimum Student Grade:      {grade_min}\n\
         Maximum Student Grade:      {grade_max}\n\
         Standard Deviation of Student Grades: {grade_stdev:.2}\n\
         Years in Operation:         {years}\n\
         Skills Offered:             {skills:?}\n\
         Client Satisfaction Scores: {raw_scores:?}\n\
         Minimum Satisfaction Score: {score_min}\n\
         Maximum Satisfaction Score: {score_max}\n\
         Mean Satisfaction Score:    {score_mean:.2}\n\
         Standard Deviation of Satisfaction Scores: {score_stdev:.2}\n",
        intl = p.has_international_clients,
        usa = p.located_in_usa,
        choices = p.choice_in_analytics,
        avg_satisfaction = p.average_client_satisfaction,
        gpa = p.average_grade_point,
        students = p.number_of_students,
        grade_mean = grades.mean,
        grade_min = grades.min,
        grade_max = grades.max,
        grade_stdev = grades.stdev,
        years = p.years_in_operation,
        skills = p.skills_offered,
        raw_scores = p.client_satisfaction_scores,
        score_min = scores.min,
        score_max = scores.max,
        score_mean = scores.mean,
        score_stdev = scores.stdev,
    )
}
