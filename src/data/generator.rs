//! Student data generator

use crate::collections::Sequence;
use crate::data::{Student, PERFECT_SCORE};
use crate::error::{AggError, Result};
use crate::physical::GroupKey;
use rand::prelude::*;

/// Default seed, so repeated runs compare the same data
pub const DEFAULT_SEED: u64 = 42;

const FIRST_NAMES: [&str; 10] = [
    "Ivan", "Maria", "Alexey", "Anna", "Dmitry", "Ekaterina", "Sergey", "Olga", "Pavel", "Natalia",
];

const SUBJECTS: [&str; 8] = [
    "Mathematics",
    "Russian",
    "Physics",
    "Chemistry",
    "Biology",
    "History",
    "English",
    "Computer Science",
];

/// Student data generator
///
/// Owns its random source; two generators with the same seed produce the
/// same students.
pub struct StudentGenerator {
    num_schools: u32,
    rng: StdRng,
}

impl StudentGenerator {
    pub fn new(num_schools: u32) -> Self {
        Self::with_seed(num_schools, DEFAULT_SEED)
    }

    pub fn with_seed(num_schools: u32, seed: u64) -> Self {
        Self {
            num_schools,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `count` students spread over schools `1..=num_schools`
    pub fn generate(&mut self, count: usize) -> Result<Sequence<Student>> {
        if self.num_schools == 0 {
            return Err(AggError::InvalidConfiguration(
                "school count must be at least 1".to_string(),
            ));
        }

        let mut students = Sequence::with_capacity(count);
        for _ in 0..count {
            students.push(self.generate_student());
        }
        Ok(students)
    }

    fn generate_student(&mut self) -> Student {
        let name = format!(
            "{} {}ov",
            FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())],
            FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())]
        );
        let age = self.rng.gen_range(16..=18);
        let school_id = self.rng.gen_range(1..=self.num_schools) as GroupKey;

        let mut student = Student::new(name, age, school_id);

        let num_exams = self.rng.gen_range(1..=5);
        for _ in 0..num_exams {
            let subject = SUBJECTS[self.rng.gen_range(0..SUBJECTS.len())];
            let mut score = self.rng.gen_range(60..=PERFECT_SCORE);
            // Extra 1-in-10 chance of a perfect result
            if self.rng.gen_ratio(1, 10) {
                score = PERFECT_SCORE;
            }
            student = student.with_exam(subject, score);
        }

        student
    }
}
