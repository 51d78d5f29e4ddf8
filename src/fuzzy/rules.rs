use crate::fuzzy::membership::{Grade, Term};
use crate::types::NormalizedFeatures;

/// Fuzzy input variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    WordCount,
    Coherence,
    ConfidenceLevel,
    TechnicalDepth,
    FillerRatio,
    Complexity,
}

impl Variable {
    /// Value of this variable on the membership axis. The filler scale is
    /// stored inverted (higher = fewer fillers) while rule terms describe
    /// filler presence, so it is re-inverted here: "low filler" peaks at zero
    /// observed fillers.
    pub fn sample(self, features: &NormalizedFeatures) -> f64 {
        match self {
            Self::WordCount => features.word_count,
            Self::Coherence => features.coherence,
            Self::ConfidenceLevel => features.confidence_level,
            Self::TechnicalDepth => features.technical_depth,
            Self::FillerRatio => 10.0 - features.filler_ratio,
            Self::Complexity => features.complexity,
        }
    }
}

/// Antecedent combinator: `And` takes the minimum degree, `Or` the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combine {
    And,
    Or,
}

/// One declarative Mamdani rule: antecedent clauses, combinator, consequent
/// output set.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub when: &'static [(Variable, Term)],
    pub combine: Combine,
    pub then: Grade,
}

impl Rule {
    /// Firing strength of this rule for the given inputs.
    pub fn strength(&self, features: &NormalizedFeatures) -> f64 {
        let degrees = self
            .when
            .iter()
            .map(|&(variable, term)| term.degree(variable.sample(features)));
        match self.combine {
            Combine::And => degrees.fold(1.0, f64::min),
            Combine::Or => degrees.fold(0.0, f64::max),
        }
    }
}

/// Clarity: coherent, filler-free answers read clearly.
pub const CLARITY_RULES: &[Rule] = &[
    Rule {
        when: &[
            (Variable::Coherence, Term::High),
            (Variable::FillerRatio, Term::Low),
        ],
        combine: Combine::And,
        then: Grade::Excellent,
    },
    Rule {
        when: &[
            (Variable::Coherence, Term::High),
            (Variable::FillerRatio, Term::Medium),
        ],
        combine: Combine::And,
        then: Grade::Good,
    },
    Rule {
        when: &[
            (Variable::Coherence, Term::Medium),
            (Variable::FillerRatio, Term::Low),
        ],
        combine: Combine::And,
        then: Grade::Good,
    },
    Rule {
        when: &[
            (Variable::Coherence, Term::Medium),
            (Variable::FillerRatio, Term::Medium),
        ],
        combine: Combine::And,
        then: Grade::Fair,
    },
    Rule {
        when: &[
            (Variable::Coherence, Term::Low),
            (Variable::FillerRatio, Term::High),
        ],
        combine: Combine::Or,
        then: Grade::Poor,
    },
];

/// Confidence: assertive vocabulary carried by enough words.
pub const CONFIDENCE_RULES: &[Rule] = &[
    Rule {
        when: &[
            (Variable::ConfidenceLevel, Term::High),
            (Variable::WordCount, Term::High),
        ],
        combine: Combine::And,
        then: Grade::Excellent,
    },
    Rule {
        when: &[
            (Variable::ConfidenceLevel, Term::High),
            (Variable::WordCount, Term::Medium),
        ],
        combine: Combine::And,
        then: Grade::Good,
    },
    Rule {
        when: &[
            (Variable::ConfidenceLevel, Term::Medium),
            (Variable::WordCount, Term::Medium),
        ],
        combine: Combine::And,
        then: Grade::Good,
    },
    Rule {
        when: &[
            (Variable::ConfidenceLevel, Term::Medium),
            (Variable::WordCount, Term::Low),
        ],
        combine: Combine::And,
        then: Grade::Fair,
    },
    Rule {
        when: &[(Variable::ConfidenceLevel, Term::Low)],
        combine: Combine::And,
        then: Grade::Poor,
    },
];

/// Relevance: technical depth backed by vocabulary complexity.
pub const RELEVANCE_RULES: &[Rule] = &[
    Rule {
        when: &[
            (Variable::TechnicalDepth, Term::High),
            (Variable::Complexity, Term::High),
        ],
        combine: Combine::And,
        then: Grade::Excellent,
    },
    Rule {
        when: &[
            (Variable::TechnicalDepth, Term::High),
            (Variable::Complexity, Term::Medium),
        ],
        combine: Combine::And,
        then: Grade::Good,
    },
    Rule {
        when: &[
            (Variable::TechnicalDepth, Term::Medium),
            (Variable::Complexity, Term::Medium),
        ],
        combine: Combine::And,
        then: Grade::Good,
    },
    Rule {
        when: &[
            (Variable::TechnicalDepth, Term::Medium),
            (Variable::Complexity, Term::Low),
        ],
        combine: Combine::And,
        then: Grade::Fair,
    },
    Rule {
        when: &[(Variable::TechnicalDepth, Term::Low)],
        combine: Combine::And,
        then: Grade::Poor,
    },
];
