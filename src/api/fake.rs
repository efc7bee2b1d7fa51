//! テスト用のインプロセス API

use super::ArtApi;
use crate::error::{ArtqError, Result};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Clone)]
enum Reply {
    Json(Value),
    Status(u16),
    Garbage,
}

struct Route {
    pattern: String,
    reply: Reply,
    delay: Option<Duration>,
}

/// URL の部分一致で応答を返すモック
///
/// 最初に一致したルートが使われる。一致しなければ 404。
pub struct FakeApi {
    routes: Vec<Route>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// JSON を返すルートを追加
    pub fn route(mut self, pattern: &str, body: Value) -> Self {
        self.routes.push(Route {
            pattern: pattern.to_string(),
            reply: Reply::Json(body),
            delay: None,
        });
        self
    }

    /// 遅延付きで JSON を返すルートを追加
    pub fn route_delayed(mut self, pattern: &str, body: Value, delay: Duration) -> Self {
        self.routes.push(Route {
            pattern: pattern.to_string(),
            reply: Reply::Json(body),
            delay: Some(delay),
        });
        self
    }

    /// ステータスエラーを返すルートを追加
    pub fn route_status(mut self, pattern: &str, status: u16) -> Self {
        self.routes.push(Route {
            pattern: pattern.to_string(),
            reply: Reply::Status(status),
            delay: None,
        });
        self
    }

    /// JSON でないボディを返すルートを追加
    pub fn route_garbage(mut self, pattern: &str) -> Self {
        self.routes.push(Route {
            pattern: pattern.to_string(),
            reply: Reply::Garbage,
            delay: None,
        });
        self
    }

    /// これまでに要求された URL
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ArtApi for FakeApi {
    fn get_json<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(url.to_string());

            let Some(route) = self.routes.iter().find(|r| url.contains(&r.pattern)) else {
                return Err(ArtqError::Api {
                    status: 404,
                    message: format!("no route for {}", url),
                });
            };

            if let Some(delay) = route.delay {
                tokio::time::sleep(delay).await;
            }

            match route.reply.clone() {
                Reply::Json(value) => Ok(value),
                Reply::Status(status) => Err(ArtqError::Api {
                    status,
                    message: "fake failure".to_string(),
                }),
                Reply::Garbage => Ok(serde_json::from_str("<html>oops</html>")?),
            }
        })
    }
}
