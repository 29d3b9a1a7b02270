/// Length of an identity card number.
pub const IC_NUMBER_LEN: usize = 12;

/// Number of trailing IC digits used as the password.
pub const PASSWORD_LEN: usize = 4;

/// Check a login: the IC number must be 12 digits and the password its last
/// four digits. Anything malformed is simply not a valid login.
pub fn verify_user(ic_number: &str, password: &str) -> bool {
    if !is_ic_number(ic_number) {
        log::debug!("Rejected malformed IC number");
        return false;
    }
    ic_number[IC_NUMBER_LEN - PASSWORD_LEN..] == *password
}

/// True if `s` is exactly twelve ASCII digits
pub fn is_ic_number(s: &str) -> bool {
    s.len() == IC_NUMBER_LEN && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_last_four_digits() {
        assert!(verify_user("123456789012", "9012"));
        assert!(verify_user("000000000000", "0000"));
    }

    #[test]
    fn wrong_password_rejected() {
        assert!(!verify_user("123456789012", "1234"));
        assert!(!verify_user("123456789012", "012"));
        assert!(!verify_user("123456789012", "89012"));
        assert!(!verify_user("123456789012", ""));
        assert!(!verify_user("123456789012", " 9012"));
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(!verify_user("12345678901", "8901"));
        assert!(!verify_user("1234567890123", "0123"));
        assert!(!verify_user("", ""));
    }

    #[test]
    fn non_digits_rejected() {
        assert!(!verify_user("12345678901a", "901a"));
        assert!(!verify_user("123456-89012", "9012"));
        assert!(!verify_user(" 23456789012", "9012"));
    }

    #[test]
    fn non_ascii_digits_rejected() {
        // Arabic-Indic digits, twelve characters but not twelve bytes
        assert!(!is_ic_number("١٢٣٤٥٦٧٨٩٠١٢"));
    }
}
