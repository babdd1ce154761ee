#[macro_export]
macro_rules! ensure_digits {
    ($d:expr,$expected:expr,$o:expr) => {
        if $d.len() == $expected {
            Ok($o)
        } else {
            Err(Error::Digits { expected: $expected, found: $d.len() })
        }
    }
}
