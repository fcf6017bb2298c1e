//! DRY - Don't Repeat Yourself

use lessons_core::{Console, Lesson, Result, Topic};

/// ❌ Lặp lại logic kết nối ngân hàng
pub fn pay_with_credit(amount: u32, console: &mut Console) {
    console.say(format!("Processing credit payment of {}", amount));
    console.say("Connecting to bank...");
    console.say("Payment successful!");
}

/// ❌ Giống hệt `pay_with_credit`, chỉ khác tên phương thức
pub fn pay_with_paypal(amount: u32, console: &mut Console) {
    console.say(format!("Processing PayPal payment of {}", amount));
    console.say("Connecting to bank...");
    console.say("Payment successful!");
}

/// Logic chung được tách ra một chỗ
pub fn process_payment(method: &str, amount: u32, console: &mut Console) {
    console.say(format!("Processing {} payment of {}", method, amount));
    console.say("Connecting to bank...");
    console.say("Payment successful!");
}

pub struct DryLesson {
    pub show_bad: bool,
}

impl Lesson for DryLesson {
    fn id(&self) -> &'static str {
        "dry"
    }

    fn title(&self) -> &'static str {
        "DRY"
    }

    fn topic(&self) -> Topic {
        Topic::CleanCode
    }

    fn summary(&self) -> &'static str {
        "Don't Repeat Yourself: extract common logic"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        if self.show_bad {
            console.say("❌ Before:");
            pay_with_credit(100, console);
            pay_with_paypal(50, console);
            console.say("✅ After:");
        }

        process_payment("credit", 100, console);
        process_payment("paypal", 50, console);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_payment() {
        let mut console = Console::capture();
        process_payment("credit", 100, &mut console);
        assert_eq!(
            console.lines(),
            [
                "Processing credit payment of 100",
                "Connecting to bank...",
                "Payment successful!"
            ]
        );
    }

    #[test]
    fn test_refactor_keeps_credit_behaviour() {
        let mut before = Console::capture();
        pay_with_credit(100, &mut before);
        let mut after = Console::capture();
        process_payment("credit", 100, &mut after);
        assert_eq!(before.lines(), after.lines());
    }
}
