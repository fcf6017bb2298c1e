//! # Proxy Pattern
//!
//! Một object đứng thay cho object thật để kiểm soát truy cập vào nó.
//! `YouTubeProxy` là caching proxy: video chỉ tải từ server ở lần đầu,
//! các lần sau phát từ cache.
//!
//! Cache có giới hạn (`capacity`). Khi đầy, video lâu nhất chưa được
//! phát sẽ bị loại (LRU).

use lessons_core::{Console, Lesson, Result, Topic};
use std::collections::{HashMap, VecDeque};
use std::thread;
use std::time::Duration;

/// Video đã tải xong, sẵn sàng phát
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    id: String,
}

impl Video {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn play(&self, console: &mut Console) {
        console.say(format!("Playing video {}...", self.id));
    }
}

/// Nguồn tải video (object thật đứng sau proxy)
pub trait VideoSource {
    fn load(&self, video_id: &str, console: &mut Console) -> Video;
}

/// Server giả lập: mỗi lần tải mất `delay`
pub struct YouTubeServer {
    delay: Duration,
}

impl YouTubeServer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl VideoSource for YouTubeServer {
    fn load(&self, video_id: &str, console: &mut Console) -> Video {
        console.say(format!("Loading video {} from YouTube server...", video_id));
        if !self.delay.is_zero() {
            // simulate heavy network loading
            thread::sleep(self.delay);
        }
        console.say("Video loaded successfully.");
        Video::new(video_id)
    }
}

/// Cache có giới hạn, loại entry ít được dùng gần đây nhất
#[derive(Debug)]
pub struct LruCache<V> {
    capacity: usize,
    entries: HashMap<String, V>,
    // front = lâu nhất chưa dùng
    order: VecDeque<String>,
}

impl<V> LruCache<V> {
    /// `capacity` tối thiểu là 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    /// Lấy entry và đánh dấu vừa dùng
    pub fn get(&mut self, key: &str) -> Option<&V> {
        if self.entries.contains_key(key) {
            self.touch(key);
        }
        self.entries.get(key)
    }

    /// Lấy entry mà không đổi thứ tự LRU
    pub fn peek(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Thêm entry; trả về entry bị loại nếu cache đã đầy
    pub fn insert(&mut self, key: String, value: V) -> Option<(String, V)> {
        if self.entries.insert(key.clone(), value).is_some() {
            self.touch(&key);
            return None;
        }

        self.order.push_back(key);
        if self.entries.len() <= self.capacity {
            return None;
        }

        let oldest = self.order.pop_front()?;
        let evicted = self.entries.remove(&oldest)?;
        Some((oldest, evicted))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn touch(&mut self, key: &str) {
        if let Some(index) = self.order.iter().position(|k| k == key) {
            if let Some(k) = self.order.remove(index) {
                self.order.push_back(k);
            }
        }
    }
}

/// Caching proxy đứng trước một `VideoSource`
pub struct YouTubeProxy<S: VideoSource = YouTubeServer> {
    source: S,
    cache: LruCache<Video>,
    loads: usize,
}

impl YouTubeProxy<YouTubeServer> {
    pub fn new(delay: Duration, capacity: usize) -> Self {
        Self::with_source(YouTubeServer::new(delay), capacity)
    }
}

impl<S: VideoSource> YouTubeProxy<S> {
    pub fn with_source(source: S, capacity: usize) -> Self {
        Self {
            source,
            cache: LruCache::new(capacity),
            loads: 0,
        }
    }

    pub fn play_video(&mut self, video_id: &str, console: &mut Console) {
        if self.cache.get(video_id).is_some() {
            log::debug!("Proxy cache hit: {}", video_id);
            console.say("[Proxy] Playing cached video...");
        } else {
            log::debug!("Proxy cache miss: {}", video_id);
            console.say("[Proxy] Video not in cache, loading...");
            let video = self.source.load(video_id, console);
            self.loads += 1;
            if let Some((evicted, _)) = self.cache.insert(video_id.to_string(), video) {
                log::debug!("Proxy cache full, evicted {}", evicted);
            }
        }

        if let Some(video) = self.cache.peek(video_id) {
            video.play(console);
        }
    }

    /// Số lần phải tải từ source
    pub fn load_count(&self) -> usize {
        self.loads
    }

    pub fn is_cached(&self, video_id: &str) -> bool {
        self.cache.contains(video_id)
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

pub struct ProxyLesson {
    delay: Duration,
    capacity: usize,
}

impl ProxyLesson {
    pub fn new(delay: Duration, capacity: usize) -> Self {
        Self { delay, capacity }
    }
}

impl Lesson for ProxyLesson {
    fn id(&self) -> &'static str {
        "proxy"
    }

    fn title(&self) -> &'static str {
        "Proxy Pattern"
    }

    fn topic(&self) -> Topic {
        Topic::Structural
    }

    fn summary(&self) -> &'static str {
        "A stand-in that controls access to the real object (caching proxy)"
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let mut proxy = YouTubeProxy::new(self.delay, self.capacity);
        proxy.play_video("abc123", console);
        console.say("---");
        proxy.play_video("abc123", console);
        console.say("---");
        proxy.play_video("xyz789", console);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proxy(capacity: usize) -> YouTubeProxy {
        YouTubeProxy::new(Duration::ZERO, capacity)
    }

    #[test]
    fn test_second_play_uses_cache() {
        let mut proxy = proxy(16);
        let mut console = Console::capture();

        proxy.play_video("abc123", &mut console);
        proxy.play_video("abc123", &mut console);
        assert_eq!(proxy.load_count(), 1);

        proxy.play_video("xyz789", &mut console);
        assert_eq!(proxy.load_count(), 2);
        assert_eq!(proxy.cached_len(), 2);
    }

    #[test]
    fn test_miss_then_hit_transcript() {
        let mut proxy = proxy(16);

        let mut console = Console::capture();
        proxy.play_video("abc123", &mut console);
        assert_eq!(
            console.lines(),
            [
                "[Proxy] Video not in cache, loading...",
                "Loading video abc123 from YouTube server...",
                "Video loaded successfully.",
                "Playing video abc123...",
            ]
        );

        let mut console = Console::capture();
        proxy.play_video("abc123", &mut console);
        assert_eq!(
            console.lines(),
            ["[Proxy] Playing cached video...", "Playing video abc123..."]
        );
    }

    #[test]
    fn test_eviction_reloads() {
        let mut proxy = proxy(2);
        let mut console = Console::capture();

        proxy.play_video("a", &mut console);
        proxy.play_video("b", &mut console);
        // "a" thành mới dùng nhất, "b" bị loại khi thêm "c"
        proxy.play_video("a", &mut console);
        proxy.play_video("c", &mut console);

        assert_eq!(proxy.cached_len(), 2);
        assert!(proxy.is_cached("a"));
        assert!(!proxy.is_cached("b"));
        assert_eq!(proxy.load_count(), 3);

        proxy.play_video("b", &mut console);
        assert_eq!(proxy.load_count(), 4);
    }

    #[test]
    fn test_lru_cache() {
        let mut cache = LruCache::new(2);
        assert!(cache.insert("x".to_string(), 1).is_none());
        assert!(cache.insert("y".to_string(), 2).is_none());
        // cập nhật không loại gì, và làm "x" mới nhất
        assert!(cache.insert("x".to_string(), 10).is_none());

        let evicted = cache.insert("z".to_string(), 3);
        assert_eq!(evicted, Some(("y".to_string(), 2)));
        assert_eq!(cache.peek("x"), Some(&10));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cache: LruCache<u8> = LruCache::new(0);
        assert_eq!(cache.capacity(), 1);
        assert!(cache.is_empty());
    }
}
