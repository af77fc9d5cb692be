//! Canonical names of the per-year FARS accident files.

/// Values that can stand in for a calendar year.
///
/// Integers convert as-is, saturating at the `i32` range so an out-of-range
/// value never wraps onto a real year. Floating point values are truncated
/// toward zero, so `2013.7` names the same file as `2013`; NaN becomes 0.
pub trait IntoYear {
    fn into_year(self) -> i32;
}

macro_rules! impl_into_year_lossless {
    ($($t:ty),*) => {
        $(
            impl IntoYear for $t {
                fn into_year(self) -> i32 {
                    i32::from(self)
                }
            }
        )*
    };
}

macro_rules! impl_into_year_saturating {
    ($($t:ty),*) => {
        $(
            impl IntoYear for $t {
                fn into_year(self) -> i32 {
                    i32::try_from(self).unwrap_or(if self > 0 { i32::MAX } else { i32::MIN })
                }
            }
        )*
    };
}

impl_into_year_lossless!(i16, i32, u16);
impl_into_year_saturating!(i64, u32, u64, usize);

impl IntoYear for f32 {
    fn into_year(self) -> i32 {
        // `as` truncates, saturates and maps NaN to 0.
        self.trunc() as i32
    }
}

impl IntoYear for f64 {
    fn into_year(self) -> i32 {
        self.trunc() as i32
    }
}

/// Returns the file name holding the accidents for `year`, e.g.
/// `accident_2013.csv.bz2`. The year is not range checked.
pub fn format_filename(year: impl IntoYear) -> String {
    format!("accident_{}.csv.bz2", year.into_year())
}
