//! Static department roster.
//!
//! Departments and their employees are configuration, not data: the
//! aggregator starts every run from this table with zeroed counters, and no
//! department or employee is ever created from sheet rows. Order is stable
//! and drives the order of the reported metrics.

pub struct RosterDepartment {
    pub name: &'static str,
    pub employees: &'static [&'static str],
}

pub const ROSTER: &[RosterDepartment] = &[
    RosterDepartment {
        name: "Personal Injury",
        employees: &["Juan G", "Bryan", "Gerardo"],
    },
    RosterDepartment {
        name: "Habitability",
        employees: &["Juan R", "Alfredo", "Jessica", "Vanessa"],
    },
];
