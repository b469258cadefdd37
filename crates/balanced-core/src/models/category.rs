//! Fixed label sets stored as integer codes.
//!
//! The entries table persists payment method, spending category and cycle
//! unit as small integer codes; these enums are the authoritative mapping
//! between the codes, the parseable names used on the CLI, and the display
//! labels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Payment method of an entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Physical or uncategorized cash payment
    #[default]
    Cash,

    /// AliPay wallet
    Alipay,

    /// WeChat wallet
    Wechat,
}

impl Method {
    /// Decodes the persisted integer code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Method::Cash),
            1 => Some(Method::Alipay),
            2 => Some(Method::Wechat),
            _ => None,
        }
    }

    /// The persisted integer code.
    pub fn code(&self) -> i64 {
        match self {
            Method::Cash => 0,
            Method::Alipay => 1,
            Method::Wechat => 2,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Method::Cash => "Cash",
            Method::Alipay => "AliPay",
            Method::Wechat => "WeChat",
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(Method::Cash),
            "alipay" => Ok(Method::Alipay),
            "wechat" => Ok(Method::Wechat),
            _ => Err(format!("Invalid payment method: {s}")),
        }
    }
}

/// Spending category of an entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Day-to-day expenses with no better fit
    #[default]
    DailyExpense,

    /// Restaurants and food
    Catering,

    /// Movies, games, outings
    Entertainment,

    /// Courses, books, tuition
    Education,

    /// Loan payments
    Loan,

    /// Clothing and accessories
    Clothing,
}

impl Category {
    /// Decodes the persisted integer code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Category::DailyExpense),
            1 => Some(Category::Catering),
            2 => Some(Category::Entertainment),
            3 => Some(Category::Education),
            4 => Some(Category::Loan),
            5 => Some(Category::Clothing),
            _ => None,
        }
    }

    /// The persisted integer code.
    pub fn code(&self) -> i64 {
        match self {
            Category::DailyExpense => 0,
            Category::Catering => 1,
            Category::Entertainment => 2,
            Category::Education => 3,
            Category::Loan => 4,
            Category::Clothing => 5,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::DailyExpense => "Daily Expense",
            Category::Catering => "Catering",
            Category::Entertainment => "Entertainment",
            Category::Education => "Education",
            Category::Loan => "Loan",
            Category::Clothing => "Clothing",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "dailyexpense" | "daily_expense" => Ok(Category::DailyExpense),
            "catering" => Ok(Category::Catering),
            "entertainment" => Ok(Category::Entertainment),
            "education" => Ok(Category::Education),
            "loan" => Ok(Category::Loan),
            "clothing" => Ok(Category::Clothing),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

/// Calendar unit of a recurrence cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CycleUnit {
    /// Calendar months
    Month,

    /// Seven-day weeks
    Week,

    /// Calendar days
    Day,
}

impl CycleUnit {
    /// Decodes the persisted integer code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(CycleUnit::Month),
            1 => Some(CycleUnit::Week),
            2 => Some(CycleUnit::Day),
            _ => None,
        }
    }

    /// The persisted integer code.
    pub fn code(&self) -> i64 {
        match self {
            CycleUnit::Month => 0,
            CycleUnit::Week => 1,
            CycleUnit::Day => 2,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CycleUnit::Month => "Month",
            CycleUnit::Week => "Week",
            CycleUnit::Day => "Day",
        }
    }
}

impl FromStr for CycleUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "month" | "months" => Ok(CycleUnit::Month),
            "week" | "weeks" => Ok(CycleUnit::Week),
            "day" | "days" => Ok(CycleUnit::Day),
            _ => Err(format!("Invalid cycle unit: {s}")),
        }
    }
}
