pub(crate) mod column;
pub(crate) mod date;

pub(crate) use column::column_name;
pub(crate) use date::{month_key, parse_dotted_date, parse_iso_datetime};
