use crate::roster::Roster;
use crate::types::{ClassReport, ClassroomError, OverallStatistics, ReportLine, Result, TopPerformer};

/// Arithmetic mean of `grades`, or `None` when there is nothing to average.
pub fn average(grades: &[f64]) -> Option<f64> {
    if grades.is_empty() {
        return None;
    }
    Some(grades.iter().sum::<f64>() / grades.len() as f64)
}

pub fn class_report(roster: &Roster) -> Vec<ReportLine> {
    roster
        .iter()
        .map(|student| ReportLine {
            name: student.name.clone(),
            average: average(&student.grades),
        })
        .collect()
}

/// Max, min and mean over per-student averages. Students without grades are skipped.
pub fn overall_statistics(roster: &Roster) -> Result<OverallStatistics> {
    let averages: Vec<f64> = roster
        .iter()
        .filter_map(|student| average(&student.grades))
        .collect();

    if averages.is_empty() {
        return Err(ClassroomError::NoData);
    }

    let max_average = averages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_average = averages.iter().copied().fold(f64::INFINITY, f64::min);
    let mean_of_averages = averages.iter().sum::<f64>() / averages.len() as f64;

    Ok(OverallStatistics {
        max_average,
        min_average,
        mean_of_averages,
    })
}

/// Student with the highest average. Ties resolve to the earliest student added.
pub fn top_performer(roster: &Roster) -> Result<TopPerformer<'_>> {
    let mut best: Option<TopPerformer<'_>> = None;

    for student in roster.iter() {
        let Some(avg) = average(&student.grades) else {
            continue;
        };
        match best {
            Some(current) if avg <= current.average => {}
            _ => {
                best = Some(TopPerformer {
                    student,
                    average: avg,
                })
            }
        }
    }

    best.ok_or(ClassroomError::NoData)
}

pub fn full_report(roster: &Roster) -> ClassReport {
    ClassReport {
        students: class_report(roster),
        overall: overall_statistics(roster).ok(),
    }
}
