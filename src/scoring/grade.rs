/// Letter grade derived from a predicted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    APlus,
    A,
    B,
    C,
    D,
}

impl Grade {
    pub const ALL: [Grade; 5] = [Grade::APlus, Grade::A, Grade::B, Grade::C, Grade::D];

    /// Band a score. Thresholds partition the score range: [90,100] A+,
    /// [80,90) A, [70,80) B, [60,70) C, everything below D.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::APlus
        } else if score >= 80.0 {
            Grade::A
        } else if score >= 70.0 {
            Grade::B
        } else if score >= 60.0 {
            Grade::C
        } else {
            Grade::D
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }

    /// Band description for the grade-scale panel.
    pub fn band(self) -> &'static str {
        match self {
            Grade::APlus => "90-100",
            Grade::A => "80-89",
            Grade::B => "70-79",
            Grade::C => "60-69",
            Grade::D => "<60",
        }
    }
}
