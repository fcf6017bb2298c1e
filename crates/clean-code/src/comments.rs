//! Comments - giải thích WHY, không phải WHAT

use lessons_core::{Console, Lesson, Result, Topic};

// ❌ This function returns x + y
pub fn add(x: i64, y: i64) -> i64 {
    x + y
}

/// Áp dụng giảm giá theo loại khách hàng.
///
/// VIP được giảm 20%, mọi loại khác giảm 10%. So sánh phân biệt hoa thường:
/// chỉ đúng `"VIP"` mới được 20%.
pub fn calculate_discount(price: f64, customer_type: &str) -> f64 {
    let discount_rate = if customer_type == "VIP" { 0.2 } else { 0.1 };
    price * (1.0 - discount_rate)
}

pub struct CommentsLesson {
    pub show_bad: bool,
}

impl Lesson for CommentsLesson {
    fn id(&self) -> &'static str {
        "comments"
    }

    fn title(&self) -> &'static str {
        "Comments"
    }

    fn topic(&self) -> Topic {
        Topic::CleanCode
    }

    fn summary(&self) -> &'static str {
        "Explain WHY, not WHAT"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        if self.show_bad {
            console.say("❌ Before:");
            console.say(format!("add(2, 3) = {}", add(2, 3)));
            console.say("✅ After:");
        }

        console.say(format!("VIP price: {:?}", calculate_discount(100.0, "VIP")));
        console.say(format!(
            "Regular price: {:?}",
            calculate_discount(100.0, "regular")
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount() {
        assert_eq!(calculate_discount(100.0, "VIP"), 80.0);
        assert_eq!(calculate_discount(100.0, "regular"), 90.0);
        assert_eq!(calculate_discount(100.0, "vip"), 90.0);
    }

    #[test]
    fn test_add() {
        assert_eq!(add(2, 3), 5);
    }

    #[test]
    fn test_transcript() {
        let mut console = Console::capture();
        CommentsLesson { show_bad: false }.run(&mut console).unwrap();
        assert_eq!(console.lines(), ["VIP price: 80.0", "Regular price: 90.0"]);
    }
}
