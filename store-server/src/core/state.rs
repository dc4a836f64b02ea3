use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::cart::{CartService, ClientCartStore, SessionCartStore};
use crate::catalog::CatalogService;
use crate::checkout::CheckoutService;
use crate::core::Config;
use crate::sales::SalesService;
use crate::utils::{AppError, AppResult};

/// 服务状态 - 持有所有服务的单例引用
///
/// HTTP 层 (本 crate 之外) 对每个请求从这里取服务。所有服务都是浅拷贝
/// (内部为 Arc/数据库句柄)，克隆成本极低。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | db | 嵌入式 SurrealDB (目录 + 销售单) |
/// | catalog | 商品/特价目录读取 |
/// | session_carts | 会话购物车 (服务端内存) |
/// | client_carts | 客户端持久化购物车 (redb) |
/// | checkout | 下单管道 |
/// | sales | 销售单状态机 (后台) |
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub catalog: CatalogService,
    pub session_carts: CartService<SessionCartStore>,
    pub client_carts: CartService<ClientCartStore>,
    pub checkout: CheckoutService,
    pub sales: SalesService,
}

impl AppState {
    /// 初始化所有服务
    ///
    /// 创建工作目录、打开两个数据库、装配服务。任何一步失败都会让启动失败。
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db = crate::db::connect(&config.store_db_path()).await?;
        tracing::info!(path = %config.store_db_path().display(), "catalog/sales database opened");

        let catalog = CatalogService::new(db.clone());
        let session_carts = CartService::new(SessionCartStore::new(), catalog.clone());
        let client_store = ClientCartStore::open(config.cart_db_path())?;
        tracing::info!(path = %config.cart_db_path().display(), "client cart store opened");
        let client_carts = CartService::new(client_store, catalog.clone());

        let checkout = CheckoutService::new(db.clone(), config.clone());
        let sales = SalesService::new(db.clone());

        Ok(Self {
            config: config.clone(),
            db,
            catalog,
            session_carts,
            client_carts,
            checkout,
            sales,
        })
    }
}
