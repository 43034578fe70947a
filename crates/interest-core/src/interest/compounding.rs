use serde::{Deserialize, Serialize};

/// Named compounding frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compounding {
    Annually,
    Semiannually,
    Quarterly,
    Monthly,
    Biweekly,
    Weekly,
    Daily,
}

impl Compounding {
    pub fn from_periods(n: i64) -> Option<Self> {
        match n {
            1 => Some(Compounding::Annually),
            2 => Some(Compounding::Semiannually),
            4 => Some(Compounding::Quarterly),
            12 => Some(Compounding::Monthly),
            26 => Some(Compounding::Biweekly),
            52 => Some(Compounding::Weekly),
            365 => Some(Compounding::Daily),
            _ => None,
        }
    }
}

/// Human label for a compounding frequency, e.g. "Monthly" or "7 times per year".
pub fn frequency_label(n: i64) -> String {
    match Compounding::from_periods(n) {
        Some(named) => format!("{named:?}"),
        None => format!("{n} times per year"),
    }
}
