//! Student record layout

use crate::collections::Sequence;
use crate::physical::{GroupKey, GroupRecord};

/// Score that counts as a perfect result
pub const PERFECT_SCORE: u32 = 100;

/// One exam taken by a student
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExamResult {
    pub subject: String,
    pub score: u32,
}

impl ExamResult {
    pub fn new(subject: impl Into<String>, score: u32) -> Self {
        Self {
            subject: subject.into(),
            score,
        }
    }
}

/// A student, grouped by school
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Student {
    pub name: String,
    pub age: u32,
    pub school_id: GroupKey,
    pub exam_results: Sequence<ExamResult>,
}

impl Student {
    pub fn new(name: impl Into<String>, age: u32, school_id: GroupKey) -> Self {
        Self {
            name: name.into(),
            age,
            school_id,
            exam_results: Sequence::new(),
        }
    }

    pub fn with_exam(mut self, subject: impl Into<String>, score: u32) -> Self {
        self.exam_results.push(ExamResult::new(subject, score));
        self
    }

    /// True if at least one exam scored 100
    pub fn has_perfect_score(&self) -> bool {
        self.exam_results
            .iter()
            .any(|exam| exam.score == PERFECT_SCORE)
    }
}

impl GroupRecord for Student {
    fn group_key(&self) -> GroupKey {
        self.school_id
    }

    fn matches(&self) -> bool {
        self.has_perfect_score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_score() {
        let student = Student::new("Anna Olgaov", 17, 3)
            .with_exam("Physics", 88)
            .with_exam("History", 100);
        assert!(student.has_perfect_score());
        assert!(student.matches());
        assert_eq!(student.group_key(), 3);
    }

    #[test]
    fn test_no_exams() {
        let student = Student::new("Ivan Pavelov", 16, 1);
        assert!(!student.has_perfect_score());
    }
}
