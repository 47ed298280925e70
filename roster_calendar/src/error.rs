use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("shift code out of range: {0}")]
    ShiftCodeOutOfRange(u8),

    #[error("month index out of range: {0}")]
    MonthOutOfRange(u32),

    #[error("cell out of grid: staff {staff}, day {day}")]
    CellOutOfGrid { staff: usize, day: u32 },

    #[error("day {day} is missing from month document \"{month}\"")]
    MissingDay { month: String, day: u32 },

    #[error("staff \"{name}\" is missing from day {day} of \"{month}\"")]
    MissingStaff {
        month: String,
        day: u32,
        name: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
}
