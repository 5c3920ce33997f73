/// Gate de acesso do painel admin: comparação de string em texto plano,
/// sem lockout e sem limite de tentativas. Não é uma fronteira de segurança.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessGate {
    #[default]
    Locked,
    /// Locked com erro visível até o próximo submit
    Rejected,
    Unlocked,
}

impl AccessGate {
    pub fn submit(self, input: &str, matches: impl Fn(&str) -> bool) -> Self {
        if matches(input) {
            AccessGate::Unlocked
        } else {
            AccessGate::Rejected
        }
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self, AccessGate::Unlocked)
    }

    pub fn has_error(&self) -> bool {
        matches!(self, AccessGate::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "zulufox145";

    fn check(input: &str) -> bool {
        input == SECRET
    }

    #[test]
    fn correct_credential_unlocks() {
        let gate = AccessGate::default().submit(SECRET, check);
        assert!(gate.is_unlocked());
        assert!(!gate.has_error());
    }

    #[test]
    fn wrong_credential_stays_locked_with_error() {
        let gate = AccessGate::default().submit("senha-errada", check);
        assert!(!gate.is_unlocked());
        assert!(gate.has_error());
    }

    #[test]
    fn correct_after_failure_still_unlocks() {
        let gate = AccessGate::default()
            .submit("tentativa1", check)
            .submit(SECRET, check);
        assert!(gate.is_unlocked());
    }

    #[test]
    fn comparison_is_case_sensitive_and_untrimmed() {
        assert!(!AccessGate::default().submit("ZULUFOX145", check).is_unlocked());
        assert!(!AccessGate::default().submit(" zulufox145", check).is_unlocked());
    }
}
