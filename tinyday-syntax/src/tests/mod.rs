
#[macro_export]
macro_rules! naive {
    ( $date: expr ) => {{
        use chrono::NaiveDateTime;
        NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M:%S%.3f").expect("invalid datetime literal")
    }};
}
