// ==========================================
// 模具车间排产系统 - 生产调度核心库
// ==========================================
// 系统定位: 决策支持核心 (贪心确定性分配,非全局最优求解)
// 调用方式: 进程内库调用,输入为订单/产能快照,输出为排产结果
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 规则与窗口配置
pub mod config;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{is_sentinel_stock_model, OrderType, UrgencyLevel};

// 领域实体
pub use domain::{
    EmployeeCapacity, MoldCapacity, Order, PriorityRecord, ScheduledAssignment, ScheduledOrder,
};

// 引擎
pub use engine::{
    CapacityTracker, InputValidator, PriorityClassifier, PriorityRanker, ScheduleAllocator,
};

// 配置
pub use config::{PriorityRuleConfig, ScheduleConfig, UrgencyBonus};

// 错误
pub use error::{SchedulingError, SchedulingResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "模具车间排产系统";

// ==========================================
// 预编译检查
// ==========================================
