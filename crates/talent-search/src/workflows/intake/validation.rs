use super::domain::IntakeForm;

pub const REQUIRED_WEIGHT_TOTAL: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeValidationError {
    #[error("job title is required")]
    MissingJobTitle,
    #[error("number of profiles must be greater than zero")]
    NoProfiles,
    #[error("batch must be greater than zero")]
    NoBatch,
    #[error("scoring scheme needs at least one row")]
    EmptyScoringScheme,
    #[error("scoring row {row} has no area name")]
    MissingAreaName { row: usize },
    #[error("scoring row {row} weight {weight}% is outside 0-100")]
    WeightOutOfRange { row: usize, weight: i32 },
    #[error("scoring weights total {total}%, expected 100%")]
    WeightTotal { total: i64 },
}

impl IntakeForm {
    /// Checks the form in field order and reports the first problem.
    /// Scoring rows are numbered from 1.
    pub fn validate(&self) -> Result<(), IntakeValidationError> {
        if self.job_title.trim().is_empty() {
            return Err(IntakeValidationError::MissingJobTitle);
        }
        if self.number_of_profiles == 0 {
            return Err(IntakeValidationError::NoProfiles);
        }
        if self.batch == 0 {
            return Err(IntakeValidationError::NoBatch);
        }
        if self.scoring_scheme.is_empty() {
            return Err(IntakeValidationError::EmptyScoringScheme);
        }

        for (index, row) in self.scoring_scheme.iter().enumerate() {
            let position = index + 1;
            if row.area_name.trim().is_empty() {
                return Err(IntakeValidationError::MissingAreaName { row: position });
            }
            if !(0..=100).contains(&row.weight_percent) {
                return Err(IntakeValidationError::WeightOutOfRange {
                    row: position,
                    weight: row.weight_percent,
                });
            }
        }

        let total: i64 = self
            .scoring_scheme
            .iter()
            .map(|row| i64::from(row.weight_percent))
            .sum();
        if total != REQUIRED_WEIGHT_TOTAL {
            return Err(IntakeValidationError::WeightTotal { total });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::intake::domain::{JdDocument, ScoringRow};

    fn form() -> IntakeForm {
        IntakeForm {
            job_title: "Risk Manager".to_string(),
            number_of_profiles: 10,
            batch: 1,
            scoring_scheme: vec![ScoringRow::new("Experience", 70), ScoringRow::new("Skills", 30)],
            jd_document: JdDocument::default(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(form().validate(), Ok(()));
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut form = form();
        form.job_title = "   ".to_string();
        assert_eq!(form.validate(), Err(IntakeValidationError::MissingJobTitle));
    }

    #[test]
    fn counts_must_be_positive() {
        let mut no_profiles = form();
        no_profiles.number_of_profiles = 0;
        assert_eq!(no_profiles.validate(), Err(IntakeValidationError::NoProfiles));

        let mut no_batch = form();
        no_batch.batch = 0;
        assert_eq!(no_batch.validate(), Err(IntakeValidationError::NoBatch));
    }

    #[test]
    fn scoring_rows_are_checked() {
        let mut empty = form();
        empty.scoring_scheme.clear();
        assert_eq!(empty.validate(), Err(IntakeValidationError::EmptyScoringScheme));

        let mut unnamed = form();
        unnamed.scoring_scheme[1].area_name = String::new();
        assert_eq!(
            unnamed.validate(),
            Err(IntakeValidationError::MissingAreaName { row: 2 })
        );

        let mut negative = form();
        negative.scoring_scheme = vec![ScoringRow::new("A", 110), ScoringRow::new("B", -10)];
        assert_eq!(
            negative.validate(),
            Err(IntakeValidationError::WeightOutOfRange { row: 1, weight: 110 })
        );
    }

    #[test]
    fn weights_must_total_one_hundred() {
        let mut short = form();
        short.scoring_scheme[1].weight_percent = 20;
        let err = short.validate().expect_err("total is 90");
        assert_eq!(err, IntakeValidationError::WeightTotal { total: 90 });
        assert_eq!(err.to_string(), "scoring weights total 90%, expected 100%");
    }
}
