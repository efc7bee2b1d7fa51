/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// 候補のうち最初に設定されている環境変数を取得
    pub fn first_of(keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| Self::get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_get_empty_var_is_none() {
        std::env::set_var("ARTQ_TEST_EMPTY_VAR", "");
        assert_eq!(EnvVar::get("ARTQ_TEST_EMPTY_VAR"), None);
        std::env::remove_var("ARTQ_TEST_EMPTY_VAR");
    }

    #[test]
    #[serial]
    fn test_first_of_skips_unset_and_empty() {
        std::env::set_var("ARTQ_TEST_A", "");
        std::env::set_var("ARTQ_TEST_B", "debug");
        assert_eq!(
            EnvVar::first_of(&["ARTQ_TEST_MISSING_12345", "ARTQ_TEST_A", "ARTQ_TEST_B"]),
            Some("debug".to_string())
        );
        std::env::remove_var("ARTQ_TEST_A");
        std::env::remove_var("ARTQ_TEST_B");
    }

    #[test]
    fn test_get_nonexistent_var() {
        assert_eq!(EnvVar::get("ARTQ_NONEXISTENT_VAR_12345"), None);
    }
}
