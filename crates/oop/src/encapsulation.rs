//! # Encapsulation
//!
//! `balance` là field private của module: code bên ngoài chỉ đọc qua
//! `balance()` và đổi qua `deposit`/`withdraw`.

use lessons_core::{Console, Lesson, LessonError, Result, Topic};

#[derive(Debug)]
pub struct BankAccount {
    pub name: String,
    balance: i64,
}

impl BankAccount {
    pub fn new(name: impl Into<String>, balance: i64) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }

    /// Nạp tiền; số tiền phải dương và không làm tràn số dư
    pub fn deposit(&mut self, amount: i64) -> Result<()> {
        Self::check_positive(amount)?;
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LessonError::InvalidAmount(format!("{} overflows balance", amount)))?;
        Ok(())
    }

    /// Không cho rút số âm hoặc quá số dư
    pub fn withdraw(&mut self, amount: i64) -> Result<()> {
        Self::check_positive(amount)?;
        if amount > self.balance {
            log::debug!(
                "Withdraw rejected for {}: {} > {}",
                self.name,
                amount,
                self.balance
            );
            return Err(LessonError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LessonError::InvalidAmount(amount.to_string()))?;
        Ok(())
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    fn check_positive(amount: i64) -> Result<()> {
        if amount <= 0 {
            return Err(LessonError::InvalidAmount(amount.to_string()));
        }
        Ok(())
    }
}

pub struct EncapsulationLesson;

impl Lesson for EncapsulationLesson {
    fn id(&self) -> &'static str {
        "encapsulation"
    }

    fn title(&self) -> &'static str {
        "Encapsulation"
    }

    fn topic(&self) -> Topic {
        Topic::Oop
    }

    fn summary(&self) -> &'static str {
        "Hide state behind methods; expose only what callers need"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let account = BankAccount::new("Bob", 100);
        console.say(&account.name);
        // account.balance -> error[E0616]: field `balance` is private
        console.say(account.balance());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_and_withdraw() {
        let mut account = BankAccount::new("Bob", 100);
        account.deposit(50).unwrap();
        account.withdraw(30).unwrap();
        assert_eq!(account.balance(), 120);
    }

    #[test]
    fn test_overdraw_is_rejected() {
        let mut account = BankAccount::new("Bob", 100);
        let err = account.withdraw(500).unwrap_err();
        assert!(matches!(
            err,
            LessonError::InsufficientFunds {
                requested: 500,
                available: 100
            }
        ));
        assert_eq!(account.balance(), 100);
    }

    #[test]
    fn test_negative_amounts_are_rejected() {
        let mut account = BankAccount::new("Bob", 100);

        let err = account.withdraw(-50).unwrap_err();
        assert!(matches!(err, LessonError::InvalidAmount(_)));
        assert!(account.deposit(-50).is_err());
        assert!(account.deposit(0).is_err());
        assert_eq!(account.balance(), 100);
    }

    #[test]
    fn test_deposit_overflow_is_an_error() {
        let mut account = BankAccount::new("Bob", 100);

        let err = account.deposit(i64::MAX).unwrap_err();
        assert!(matches!(err, LessonError::InvalidAmount(_)));
        assert_eq!(account.balance(), 100);
    }

    #[test]
    fn test_transcript() {
        let mut console = Console::capture();
        EncapsulationLesson.run(&mut console).unwrap();
        assert_eq!(console.lines(), ["Bob", "100"]);
    }
}
