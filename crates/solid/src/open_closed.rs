//! # O - Open/Closed Principle
//!
//! Mở để mở rộng, đóng để sửa đổi: thêm phương thức thanh toán mới là thêm
//! một type implement `PaymentMethod`, không phải sửa `PaymentProcessor`.

use lessons_core::{Console, Lesson, Result, Topic};

/// ❌ Mỗi phương thức mới lại phải sửa `pay`
pub mod before {
    use lessons_core::Console;

    pub struct PaymentProcessor;

    impl PaymentProcessor {
        pub fn pay(&self, method: &str, console: &mut Console) {
            if method == "paypal" {
                console.say("Paying with PayPal");
            } else if method == "credit" {
                console.say("Paying with Credit Card");
            } else {
                log::debug!("Unsupported payment method: {}", method);
            }
        }
    }
}

pub trait PaymentMethod {
    fn pay(&self, console: &mut Console);
}

pub struct PayPal;

impl PaymentMethod for PayPal {
    fn pay(&self, console: &mut Console) {
        console.say("Paying with PayPal");
    }
}

pub struct CreditCard;

impl PaymentMethod for CreditCard {
    fn pay(&self, console: &mut Console) {
        console.say("Paying with Credit Card");
    }
}

pub struct PaymentProcessor;

impl PaymentProcessor {
    pub fn process(&self, payment: &dyn PaymentMethod, console: &mut Console) {
        payment.pay(console);
    }
}

pub struct OpenClosedLesson {
    pub show_bad: bool,
}

impl Lesson for OpenClosedLesson {
    fn id(&self) -> &'static str {
        "open-closed"
    }

    fn title(&self) -> &'static str {
        "O - Open/Closed"
    }

    fn topic(&self) -> Topic {
        Topic::Solid
    }

    fn summary(&self) -> &'static str {
        "Open for extension, closed for modification"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        if self.show_bad {
            console.say("❌ Before:");
            let processor = before::PaymentProcessor;
            processor.pay("paypal", console);
            processor.pay("credit", console);
            console.say("✅ After:");
        }

        let processor = PaymentProcessor;
        processor.process(&PayPal, console);
        processor.process(&CreditCard, console);
        Ok(())
    }
}
