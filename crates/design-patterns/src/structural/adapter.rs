//! # Adapter Pattern
//!
//! Chuyển interface của một type sang interface mà client mong đợi.
//! Ở đây: cắm thiết bị châu Âu vào ổ cắm kiểu Mỹ.

use lessons_core::{Console, Lesson, Result, Topic};

pub trait Socket {
    fn voltage(&self) -> i32;
    fn live(&self) -> i32;
    fn neutral(&self) -> i32;
}

pub struct EuropeanSocket;

impl Socket for EuropeanSocket {
    fn voltage(&self) -> i32 {
        230
    }

    fn live(&self) -> i32 {
        1
    }

    fn neutral(&self) -> i32 {
        -1
    }
}

pub struct UsaSocket;

impl Socket for UsaSocket {
    fn voltage(&self) -> i32 {
        120
    }

    fn live(&self) -> i32 {
        1
    }

    fn neutral(&self) -> i32 {
        -1
    }
}

/// Nối ổ cắm châu Âu cho thiết bị Mỹ
pub struct EuropeanToUsAdapter {
    socket: EuropeanSocket,
}

impl EuropeanToUsAdapter {
    pub fn new(socket: EuropeanSocket) -> Self {
        Self { socket }
    }
}

impl Socket for EuropeanToUsAdapter {
    fn voltage(&self) -> i32 {
        // 230V -> 120V
        120
    }

    fn live(&self) -> i32 {
        self.socket.live()
    }

    fn neutral(&self) -> i32 {
        self.socket.neutral()
    }
}

pub struct AdapterLesson;

impl Lesson for AdapterLesson {
    fn id(&self) -> &'static str {
        "adapter"
    }

    fn title(&self) -> &'static str {
        "Adapter Pattern"
    }

    fn topic(&self) -> Topic {
        Topic::Structural
    }

    fn summary(&self) -> &'static str {
        "Convert one interface into the one a client expects"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let euro_socket = EuropeanSocket;
        let adapter = EuropeanToUsAdapter::new(euro_socket);
        console.say(format!("Voltage after adaptation: {}", adapter.voltage()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wiring(socket: &dyn Socket) -> (i32, i32, i32) {
        (socket.voltage(), socket.live(), socket.neutral())
    }

    #[test]
    fn test_adapter_looks_like_usa_socket() {
        let adapter = EuropeanToUsAdapter::new(EuropeanSocket);
        assert_eq!(wiring(&adapter), wiring(&UsaSocket));
        assert_eq!(wiring(&EuropeanSocket), (230, 1, -1));
    }
}
