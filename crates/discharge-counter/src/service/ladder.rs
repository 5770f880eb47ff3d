use serde::{Deserialize, Serialize};

/// Conscript rank, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    PrivateRecruit,
    Private,
    Corporal,
    Sergeant,
}

impl Rank {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::PrivateRecruit,
            Self::Private,
            Self::Corporal,
            Self::Sergeant,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PrivateRecruit => "이병",
            Self::Private => "일병",
            Self::Corporal => "상병",
            Self::Sergeant => "병장",
        }
    }
}

/// Label shown in place of a rank or pay grade once service has ended.
pub const CIVILIAN_LABEL: &str = "민간인";

/// Anything placed on a promotion ladder.
pub trait Tier {
    /// Months after enlistment at which this tier activates.
    fn threshold_months(&self) -> u32;
}

/// A rank together with the month it is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankTier {
    pub rank: Rank,
    pub threshold_months: u32,
}

impl RankTier {
    pub const fn name(&self) -> &'static str {
        self.rank.label()
    }
}

impl Tier for RankTier {
    fn threshold_months(&self) -> u32 {
        self.threshold_months
    }
}

/// Monthly stipend step within a rank (호봉).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayGrade {
    pub rank: Rank,
    pub grade: u8,
    pub threshold_months: u32,
}

impl PayGrade {
    /// Grade on its own, e.g. `3호봉`.
    pub fn grade_label(&self) -> String {
        format!("{}호봉", self.grade)
    }

    /// Rank and grade, e.g. `일병 3호봉`.
    pub fn full_label(&self) -> String {
        format!("{} {}호봉", self.rank.label(), self.grade)
    }
}

impl Tier for PayGrade {
    fn threshold_months(&self) -> u32 {
        self.threshold_months
    }
}

const fn rank(rank: Rank, threshold_months: u32) -> RankTier {
    RankTier {
        rank,
        threshold_months,
    }
}

const fn grade(rank: Rank, grade: u8, threshold_months: u32) -> PayGrade {
    PayGrade {
        rank,
        grade,
        threshold_months,
    }
}

pub const RANKS: [RankTier; 4] = [
    rank(Rank::PrivateRecruit, 0),
    rank(Rank::Private, 3),
    rank(Rank::Corporal, 9),
    rank(Rank::Sergeant, 15),
];

pub const PAY_GRADES: [PayGrade; 22] = [
    grade(Rank::PrivateRecruit, 1, 0),
    grade(Rank::PrivateRecruit, 2, 1),
    grade(Rank::PrivateRecruit, 3, 2),
    grade(Rank::Private, 1, 3),
    grade(Rank::Private, 2, 4),
    grade(Rank::Private, 3, 5),
    grade(Rank::Private, 4, 6),
    grade(Rank::Private, 5, 7),
    grade(Rank::Private, 6, 8),
    grade(Rank::Corporal, 1, 9),
    grade(Rank::Corporal, 2, 10),
    grade(Rank::Corporal, 3, 11),
    grade(Rank::Corporal, 4, 12),
    grade(Rank::Corporal, 5, 13),
    grade(Rank::Corporal, 6, 14),
    grade(Rank::Sergeant, 1, 15),
    grade(Rank::Sergeant, 2, 16),
    grade(Rank::Sergeant, 3, 17),
    grade(Rank::Sergeant, 4, 18),
    grade(Rank::Sergeant, 5, 19),
    grade(Rank::Sergeant, 6, 20),
    grade(Rank::Sergeant, 7, 21),
];

/// Index of the tier active after `elapsed_months`.
///
/// Picks the last tier whose threshold has been reached and falls back to the
/// first tier when none has, e.g. before enlistment.
pub fn active_index<T: Tier>(ladder: &[T], elapsed_months: i32) -> usize {
    ladder
        .iter()
        .rposition(|tier| i64::from(tier.threshold_months()) <= i64::from(elapsed_months))
        .unwrap_or(0)
}

/// Index of the first tier above `current` that `reachable` accepts.
///
/// `reachable` receives a threshold and reports whether that promotion still
/// happens during service.
pub fn next_index<T, F>(ladder: &[T], current: usize, reachable: F) -> Option<usize>
where
    T: Tier,
    F: Fn(u32) -> bool,
{
    let floor = ladder.get(current)?.threshold_months();
    ladder.iter().position(|tier| {
        let threshold = tier.threshold_months();
        threshold > floor && reachable(threshold)
    })
}
