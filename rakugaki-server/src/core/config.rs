use std::path::PathBuf;

/// 邮件发送配置
///
/// 仅当 `EMAIL_USER` 和 `EMAIL_PASS` 都存在时才会构造，
/// 否则通知功能关闭，预订接口行为不变。
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// 发件地址，同时也是餐厅接收新预订提醒的地址
    pub user: String,
    /// 发件账户密钥 (应用专用密码)
    pub password: String,
    /// SMTP 中继主机
    pub smtp_host: String,
    /// SMTP 端口 (隐式 TLS)
    pub smtp_port: u16,
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PORT | 3001 | HTTP 服务端口 |
/// | EMAIL_USER | - | 发件地址 |
/// | EMAIL_PASS | - | 发件密钥 |
/// | SMTP_HOST | smtp.gmail.com | SMTP 主机 |
/// | SMTP_PORT | 465 | SMTP 端口 |
/// | STATIC_DIR | public | 静态页面目录 |
/// | NOTIFICATION_QUEUE_SIZE | 100 | 通知队列容量 |
///
/// # 示例
///
/// ```ignore
/// PORT=8080 EMAIL_USER=info@rakugaki.com EMAIL_PASS=secret cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 邮件配置 (None = 不发送通知)
    pub email: Option<EmailConfig>,
    /// 静态页面目录 (index.html, menu.html, 资源文件)
    pub static_dir: PathBuf,
    /// 通知队列容量
    pub notification_queue_size: usize,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let email = match (non_empty("EMAIL_USER"), non_empty("EMAIL_PASS")) {
            (Some(user), Some(password)) => Some(EmailConfig {
                user,
                password,
                smtp_host: non_empty("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".into()),
                smtp_port: var("SMTP_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(465),
            }),
            _ => None,
        };

        Self {
            http_port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(3001),
            email,
            static_dir: non_empty("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            notification_queue_size: var("NOTIFICATION_QUEUE_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(100),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景，不读取进程环境
    pub fn with_overrides(static_dir: impl Into<PathBuf>, http_port: u16) -> Self {
        let mut config = Self::from_vars(|_| None);
        config.static_dir = static_dir.into();
        config.http_port = http_port;
        config
    }
}
