//! Function size - một hàm, một trách nhiệm

use lessons_core::{Console, Lesson, LessonError, Result, Topic};
use serde_json::{json, Value};

/// ❌ Validate, lưu DB và gửi email trong cùng một hàm
pub fn process_user(data: &Value, console: &mut Console) -> Result<()> {
    // validate
    let email = match data.get("email").and_then(Value::as_str) {
        Some(email) if !email.is_empty() => email,
        _ => return Err(LessonError::MissingEmail),
    };
    // save to DB
    console.say(format!("Saving {} to database...", email));
    // send email
    console.say(format!("Sending welcome email to {}", email));
    Ok(())
}

/// Trả về email nếu user record hợp lệ
pub fn validate_user(data: &Value) -> Result<&str> {
    data.get("email")
        .and_then(Value::as_str)
        .filter(|email| !email.is_empty())
        .ok_or(LessonError::MissingEmail)
}

pub fn save_user_to_db(email: &str, console: &mut Console) {
    console.say(format!("Saving {} to database...", email));
}

pub fn send_welcome_email(email: &str, console: &mut Console) {
    console.say(format!("Sending welcome email to {}", email));
}

pub fn process_user_refactored(data: &Value, console: &mut Console) -> Result<()> {
    let email = validate_user(data).map_err(|e| {
        log::debug!("Rejected user record {}: {}", data, e);
        e
    })?;
    save_user_to_db(email, console);
    send_welcome_email(email, console);
    Ok(())
}

pub struct FunctionSizeLesson {
    pub show_bad: bool,
}

impl Lesson for FunctionSizeLesson {
    fn id(&self) -> &'static str {
        "function-size"
    }

    fn title(&self) -> &'static str {
        "Function Size"
    }

    fn topic(&self) -> Topic {
        Topic::CleanCode
    }

    fn summary(&self) -> &'static str {
        "One function = one responsibility"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let user = json!({ "email": "test@example.com" });

        if self.show_bad {
            console.say("❌ Before:");
            process_user(&user, console)?;
            console.say("✅ After:");
        }

        process_user_refactored(&user, console)
    }
}
