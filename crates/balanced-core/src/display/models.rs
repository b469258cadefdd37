//! Display implementations for the domain models.

use std::fmt;

use super::datetime::LocalDate;
use crate::models::{Entry, Tag, Totals};
use crate::sections::Section;

/// A wrapper around a signed amount that formats as currency, e.g.
/// `¥250.00` or `-¥42.50`.
pub struct Currency(pub f64);

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0.0 {
            write!(f, "-¥{:.2}", -self.0)
        } else {
            write!(f, "¥{:.2}", self.0)
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{}  {}  {} ({})  {}",
            self.id,
            Currency(self.amount),
            self.category.label(),
            self.method.label(),
            LocalDate(&self.first_time)
        )?;
        if let Some(note) = &self.note {
            write!(f, "  {note}")?;
        }
        if let Some(recurrence) = &self.recurrence {
            write!(
                f,
                "  [every {} {}(s)]",
                recurrence.count,
                recurrence.unit.label().to_lowercase()
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        for entry in &self.entries {
            writeln!(f, "  {entry}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Income:  {}", Currency(self.income))?;
        writeln!(f, "Expense: {}", Currency(self.expense))?;
        write!(f, "Deposit: {}", Currency(self.deposit))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}  {}", self.id, self.title)
    }
}
