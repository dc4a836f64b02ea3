use std::path::PathBuf;

/// 服务器配置 - 店面核心的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/storefront | 工作目录 |
/// | ENVIRONMENT | development | 运行环境 |
/// | STORE_DB_DIR | store.db | 目录数据库 (SurrealDB/RocksDB) |
/// | CART_DB_FILE | carts.redb | 客户端购物车数据库 (redb) |
/// | STORE_ADDRESS | (内置门店地址) | 自提地址 |
/// | BANK_NAME / BANK_ACCOUNT_NAME / BANK_IBAN | (内置) | 转账说明 |
/// | ORDER_ID_MAX_ATTEMPTS | 10 | 订单号冲突重试上限 |
/// | LOG_DIR | (无) | 日志目录, 不设置则只输出到终端 |
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// SurrealDB 数据目录名 (相对 work_dir)
    pub store_db_dir: String,
    /// redb 购物车文件名 (相对 work_dir)
    pub cart_db_file: String,
    /// 自提订单使用的固定门店地址
    pub store_address: String,

    // === 银行转账说明 (下单后展示, 等待人工确认) ===
    pub bank_name: String,
    pub bank_account_name: String,
    pub bank_iban: String,

    /// 订单号生成冲突时的重试上限
    pub order_id_max_attempts: u32,
    /// 日志目录 (可选)
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/storefront".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            store_db_dir: std::env::var("STORE_DB_DIR").unwrap_or_else(|_| "store.db".into()),
            cart_db_file: std::env::var("CART_DB_FILE").unwrap_or_else(|_| "carts.redb".into()),
            store_address: std::env::var("STORE_ADDRESS")
                .unwrap_or_else(|_| "Gadget Store, 12 High Street, Springfield".into()),
            bank_name: std::env::var("BANK_NAME").unwrap_or_else(|_| "First National Bank".into()),
            bank_account_name: std::env::var("BANK_ACCOUNT_NAME")
                .unwrap_or_else(|_| "Gadget Store Ltd".into()),
            bank_iban: std::env::var("BANK_IBAN")
                .unwrap_or_else(|_| "GB29 NWBK 6016 1331 9268 19".into()),
            order_id_max_attempts: std::env::var("ORDER_ID_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// 使用自定义工作目录覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// SurrealDB 数据目录的完整路径
    pub fn store_db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.store_db_dir)
    }

    /// redb 购物车文件的完整路径
    pub fn cart_db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.cart_db_file)
    }
}
