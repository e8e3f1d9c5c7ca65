use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::ValidationError;

/// The prize table shipped with the wheel. The last entry is the "no win" slot.
pub const DEFAULT_PRIZES: [&str; 16] = [
    "白酒",
    "阿五集装箱",
    "信阳菜",
    "茶饼礼盒",
    "白酒+阿五集装箱",
    "白酒+信阳菜",
    "白酒+茶饼礼盒",
    "白酒+阿五集装箱+信阳菜",
    "白酒+阿五集装箱+茶饼礼盒",
    "白酒+信阳菜+茶饼礼盒",
    "白酒+阿五集装箱+信阳菜+茶饼礼盒",
    "阿五集装箱+信阳菜",
    "阿五集装箱+茶饼礼盒",
    "阿五集装箱+信阳菜+茶饼礼盒",
    "信阳菜+茶饼礼盒",
    "恭喜你，啥也没",
];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prize {
    pub index: usize,
    pub label: String,
}

/// What the shell shows once a spin has ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Win(Prize),
    NoWin(Prize),
}

impl Outcome {
    pub fn prize(&self) -> &Prize {
        match self {
            Outcome::Win(prize) | Outcome::NoWin(prize) => prize,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win(_))
    }
}

/// Ordered, non-empty list of prizes with one designated "no win" sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct PrizeList {
    prizes: Vec<Prize>,
    sentinel: usize,
}

impl PrizeList {
    /// Builds the table from labels in wheel order. `sentinel` defaults to the last entry.
    pub fn new<I, S>(labels: I, sentinel: Option<usize>) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prizes: Vec<Prize> = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| Prize { index, label: label.into() })
            .collect();

        if prizes.is_empty() {
            let mut err = ValidationError::new("empty_prize_list");
            err.message = Some(Cow::from("the wheel needs at least one prize"));
            return Err(err);
        }

        let sentinel = sentinel.unwrap_or(prizes.len() - 1);
        if sentinel >= prizes.len() {
            let mut err = ValidationError::new("sentinel_out_of_range");
            err.message = Some(Cow::from(format!(
                "sentinel index {} is outside 0..{}",
                sentinel,
                prizes.len()
            )));
            return Err(err);
        }

        Ok(Self { prizes, sentinel })
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    // Construction rejects empty tables, kept for the len/is_empty pairing.
    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Prize> {
        self.prizes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prize> {
        self.prizes.iter()
    }

    pub fn sentinel(&self) -> usize {
        self.sentinel
    }

    pub fn is_sentinel(&self, index: usize) -> bool {
        index == self.sentinel
    }

    /// Maps a reported index to win / no-win framing.
    pub fn outcome(&self, index: usize) -> Option<Outcome> {
        let prize = self.get(index)?.clone();
        if self.is_sentinel(index) {
            Some(Outcome::NoWin(prize))
        } else {
            Some(Outcome::Win(prize))
        }
    }
}

impl Default for PrizeList {
    fn default() -> Self {
        Self {
            prizes: DEFAULT_PRIZES
                .iter()
                .enumerate()
                .map(|(index, label)| Prize { index, label: label.to_string() })
                .collect(),
            sentinel: DEFAULT_PRIZES.len() - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_sentinel_is_last() {
        let prizes = PrizeList::default();
        assert_eq!(prizes.len(), 16);
        assert_eq!(prizes.sentinel(), 15);
        assert_eq!(prizes.get(15).unwrap().label, "恭喜你，啥也没");
        assert!(prizes.iter().enumerate().all(|(i, p)| p.index == i));
    }

    #[test]
    fn test_outcome_framing() {
        let prizes = PrizeList::default();
        let win = prizes.outcome(7).unwrap();
        assert!(win.is_win());
        assert_eq!(win.prize().index, 7);
        assert!(!prizes.outcome(15).unwrap().is_win());
        assert!(prizes.outcome(16).is_none());
    }

    #[test]
    fn test_rejects_empty_and_bad_sentinel() {
        let empty: Vec<String> = vec![];
        assert_eq!(PrizeList::new(empty, None).unwrap_err().code, "empty_prize_list");
        assert_eq!(
            PrizeList::new(["a", "b"], Some(2)).unwrap_err().code,
            "sentinel_out_of_range"
        );
    }

    #[test]
    fn test_duplicate_labels_allowed() {
        let prizes = PrizeList::new(["tea", "tea", "nothing"], Some(0)).unwrap();
        assert_eq!(prizes.len(), 3);
        assert!(prizes.is_sentinel(0));
        assert!(prizes.outcome(1).unwrap().is_win());
    }
}
