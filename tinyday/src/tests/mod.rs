mod arithmetic;
mod boundary;
mod compare;

#[cfg(feature = "fuzzing")]
mod fuzzing;

#[macro_export]
macro_rules! instant {
    ( $raw: expr ) => {{
        use chrono::Utc;
        $crate::Context::new(Utc).try_parse($raw).expect("invalid instant literal")
    }};
    ( $raw: expr, $tz: expr ) => {{
        $crate::Context::new($tz).try_parse($raw).expect("invalid instant literal")
    }};
}

#[macro_export]
macro_rules! iso {
    ( $instant: expr ) => {{
        $instant.to_iso_string().expect("invalid instant")
    }};
}
