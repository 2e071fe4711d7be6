//! Composable record predicates
//!
//! Matching rules:
//! - Name and cuisine criteria match when any whitespace-delimited word
//!   of the record value starts with the criterion, ignoring case.
//! - An absent criterion is a wildcard; an empty-string criterion is
//!   treated identically (never matched literally).
//! - Bound criteria compare inclusively: price and distance against an
//!   upper bound, rating against a lower bound.

use crate::model::{Restaurant, SearchCriteria};

/// A boolean test over a (record, criteria) pair.
///
/// Atomic variants test a single record attribute against a single
/// criteria field. Composite variants combine child predicates into
/// boolean trees built once, at composition time. Predicates hold no
/// record-specific state, so one composed tree can be evaluated against
/// an entire record set.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Any word of the record name starts with the name criterion
    NameMatches,
    /// Any word of the cuisine name starts with the cuisine criterion
    CuisineMatches,
    /// Average price is at most the max price criterion
    CheapEnough,
    /// Distance is at most the max distance criterion
    CloseEnough,
    /// Rating is at least the min rating criterion
    RatedHighEnough,
    /// Every child is satisfied; empty is vacuously true
    And(Vec<Predicate>),
    /// At least one child is satisfied; empty is vacuously false
    Or(Vec<Predicate>),
    /// The child is not satisfied
    Not(Box<Predicate>),
}

impl Predicate {
    /// The production composition: all five criteria fields must be
    /// satisfied for a record to be a valid match.
    pub fn matching_all() -> Self {
        Predicate::And(vec![
            Predicate::NameMatches,
            Predicate::CuisineMatches,
            Predicate::CheapEnough,
            Predicate::CloseEnough,
            Predicate::RatedHighEnough,
        ])
    }

    /// Combines predicates so that every one must hold.
    pub fn all_of(children: Vec<Predicate>) -> Self {
        Predicate::And(children)
    }

    /// Combines predicates so that at least one must hold.
    pub fn any_of(children: Vec<Predicate>) -> Self {
        Predicate::Or(children)
    }

    /// Negates a predicate.
    pub fn negate(inner: Predicate) -> Self {
        Predicate::Not(Box::new(inner))
    }

    /// Evaluates this predicate against a record and criteria.
    ///
    /// Evaluation is pure: same inputs, same answer, no side effects.
    pub fn satisfied_by(&self, restaurant: &Restaurant, criteria: &SearchCriteria) -> bool {
        match self {
            Predicate::NameMatches => {
                word_prefix_match(&restaurant.name, criteria.name.as_deref())
            }
            Predicate::CuisineMatches => {
                word_prefix_match(&restaurant.cuisine, criteria.cuisine.as_deref())
            }
            Predicate::CheapEnough => match criteria.max_price {
                Some(max) => restaurant.price <= max,
                None => true,
            },
            Predicate::CloseEnough => match criteria.max_distance {
                Some(max) => restaurant.distance <= max,
                None => true,
            },
            Predicate::RatedHighEnough => match criteria.min_rating {
                Some(min) => restaurant.rating >= min,
                None => true,
            },
            Predicate::And(children) => children
                .iter()
                .all(|child| child.satisfied_by(restaurant, criteria)),
            Predicate::Or(children) => children
                .iter()
                .any(|child| child.satisfied_by(restaurant, criteria)),
            Predicate::Not(inner) => !inner.satisfied_by(restaurant, criteria),
        }
    }
}

/// True when any whitespace-delimited word of `text` starts with the
/// criterion, ignoring case. Absent and empty criteria match everything.
fn word_prefix_match(text: &str, criterion: Option<&str>) -> bool {
    let prefix = match criterion {
        None => return true,
        Some(p) if p.is_empty() => return true,
        Some(p) => p.to_lowercase(),
    };

    text.to_lowercase()
        .split_whitespace()
        .any(|word| word.starts_with(&prefix))
}
