use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One of the nine behavioral profile types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Perfectionist,
    Helper,
    Achiever,
    Individualist,
    Observer,
    Loyalist,
    Enthusiast,
    Challenger,
    Peacemaker,
}

impl Profile {
    pub const ALL: [Profile; 9] = [
        Self::Perfectionist,
        Self::Helper,
        Self::Achiever,
        Self::Individualist,
        Self::Observer,
        Self::Loyalist,
        Self::Enthusiast,
        Self::Challenger,
        Self::Peacemaker,
    ];

    pub const fn number(self) -> u8 {
        match self {
            Self::Perfectionist => 1,
            Self::Helper => 2,
            Self::Achiever => 3,
            Self::Individualist => 4,
            Self::Observer => 5,
            Self::Loyalist => 6,
            Self::Enthusiast => 7,
            Self::Challenger => 8,
            Self::Peacemaker => 9,
        }
    }

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Perfectionist),
            2 => Some(Self::Helper),
            3 => Some(Self::Achiever),
            4 => Some(Self::Individualist),
            5 => Some(Self::Observer),
            6 => Some(Self::Loyalist),
            7 => Some(Self::Enthusiast),
            8 => Some(Self::Challenger),
            9 => Some(Self::Peacemaker),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Perfectionist => "Perfectionist",
            Self::Helper => "Helper",
            Self::Achiever => "Achiever",
            Self::Individualist => "Individualist",
            Self::Observer => "Observer",
            Self::Loyalist => "Loyalist",
            Self::Enthusiast => "Enthusiast",
            Self::Challenger => "Challenger",
            Self::Peacemaker => "Peacemaker",
        }
    }

    /// The triad this profile belongs to. Body holds 8, 9 and 1; Heart holds
    /// 2, 3 and 4; Mind holds 5, 6 and 7.
    pub const fn triad(self) -> Triad {
        match self {
            Self::Challenger | Self::Peacemaker | Self::Perfectionist => Triad::Body,
            Self::Helper | Self::Achiever | Self::Individualist => Triad::Heart,
            Self::Observer | Self::Loyalist | Self::Enthusiast => Triad::Mind,
        }
    }
}

/// Grouping of the nine profiles into three centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Triad {
    Body,
    Heart,
    Mind,
}

impl Triad {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Body => "Body",
            Self::Heart => "Heart",
            Self::Mind => "Mind",
        }
    }
}

/// Per-triad answer tallies. Each spans `[0, 5]` on a complete assessment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriadScores {
    pub body: u8,
    pub heart: u8,
    pub mind: u8,
}

/// Scored behavioral assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BehavioralOutcome {
    pub profile_scores: BTreeMap<u8, u8>,
    pub triad_scores: TriadScores,
    pub dominant: DominantProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DominantProfile {
    pub number: u8,
    pub name: &'static str,
}

/// Tallies each answered profile, sums the triads and picks the dominant
/// profile. Ties break toward the lowest profile number; with no answers at
/// all, every tally is zero and the scan still settles on profile 1.
pub fn score_behavioral(answers: &BTreeMap<u8, Profile>) -> BehavioralOutcome {
    let mut tallies = [0u8; 9];
    for profile in answers.values() {
        tallies[(profile.number() - 1) as usize] += 1;
    }

    let triad_scores = TriadScores {
        body: Profile::ALL
            .iter()
            .filter(|p| p.triad() == Triad::Body)
            .map(|p| tallies[(p.number() - 1) as usize])
            .sum(),
        heart: Profile::ALL
            .iter()
            .filter(|p| p.triad() == Triad::Heart)
            .map(|p| tallies[(p.number() - 1) as usize])
            .sum(),
        mind: Profile::ALL
            .iter()
            .filter(|p| p.triad() == Triad::Mind)
            .map(|p| tallies[(p.number() - 1) as usize])
            .sum(),
    };

    let mut best: i16 = -1;
    let mut dominant_number = 0u8;
    for number in 1..=9u8 {
        let score = tallies[(number - 1) as usize] as i16;
        if score > best {
            best = score;
            dominant_number = number;
        }
    }
    // dominant_number is always in 1..=9 after the scan
    let name = Profile::from_number(dominant_number)
        .map(Profile::name)
        .unwrap_or("Perfectionist");

    BehavioralOutcome {
        profile_scores: (1..=9u8)
            .map(|n| (n, tallies[(n - 1) as usize]))
            .collect(),
        triad_scores,
        dominant: DominantProfile {
            number: dominant_number,
            name,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(u8, Profile)]) -> BTreeMap<u8, Profile> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn no_answers_settles_on_profile_one() {
        let outcome = score_behavioral(&BTreeMap::new());
        assert_eq!(outcome.dominant.number, 1);
        assert_eq!(outcome.dominant.name, "Perfectionist");
        assert_eq!(outcome.triad_scores, TriadScores::default());
    }

    #[test]
    fn ties_break_toward_the_lowest_profile() {
        let outcome = score_behavioral(&answers(&[
            (1, Profile::Achiever),
            (2, Profile::Challenger),
        ]));
        assert_eq!(outcome.dominant.number, 3);
    }

    #[test]
    fn dominant_is_the_most_frequent_profile() {
        let outcome = score_behavioral(&answers(&[
            (1, Profile::Observer),
            (2, Profile::Observer),
            (3, Profile::Helper),
        ]));
        assert_eq!(outcome.dominant.number, 5);
        assert_eq!(outcome.dominant.name, "Observer");
        assert_eq!(outcome.profile_scores[&5], 2);
    }

    #[test]
    fn triads_group_their_three_profiles() {
        let outcome = score_behavioral(&answers(&[
            (1, Profile::Challenger),
            (2, Profile::Peacemaker),
            (3, Profile::Perfectionist),
            (4, Profile::Helper),
            (5, Profile::Enthusiast),
        ]));
        assert_eq!(outcome.triad_scores.body, 3);
        assert_eq!(outcome.triad_scores.heart, 1);
        assert_eq!(outcome.triad_scores.mind, 1);
    }

    #[test]
    fn triad_totals_cover_every_answer() {
        let all: BTreeMap<u8, Profile> = (0..9)
            .map(|i| (i + 1, Profile::ALL[i as usize]))
            .collect();
        let outcome = score_behavioral(&all);
        let sum =
            outcome.triad_scores.body + outcome.triad_scores.heart + outcome.triad_scores.mind;
        assert_eq!(sum as usize, all.len());
    }
}
