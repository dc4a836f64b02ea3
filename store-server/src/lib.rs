//! Gadget Storefront Core
//!
//! Cart/checkout pricing and order-materialization pipeline for a gadget
//! retailer, plus the admin-side sale status transitions. The HTTP layer,
//! auth, uploads and rendering live outside this crate; each endpoint calls
//! into the services assembled in [`core::state::AppState`].
//!
//! # Module structure
//!
//! ```text
//! store-server/src/
//! ├── core/          # 配置、状态
//! ├── db/            # 嵌入式 SurrealDB 与仓储层
//! ├── catalog/       # 商品/特价目录读取与变体定价
//! ├── cart/          # 购物车存储、聚合与金额计算
//! ├── checkout/      # 表单校验、订单号、下单落库
//! ├── sales/         # 销售单支付/完成状态机
//! └── utils/         # 工具函数
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod db;
pub mod sales;
pub mod utils;

// Re-export 公共类型
pub use crate::cart::{AddToCart, CartError, CartService, ClientCartStore, SessionCartStore};
pub use crate::catalog::CatalogService;
pub use crate::checkout::{CheckoutError, CheckoutForm, CheckoutService, PlacedOrder};
pub use crate::core::{AppState, Config};
pub use crate::sales::{SaleError, SalesService};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};
