// ==========================================
// 模具车间排产系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod capacity;
pub mod order;
pub mod types;

// 重导出核心类型
pub use capacity::{EmployeeCapacity, MoldCapacity};
pub use order::{Order, PriorityRecord, ScheduledAssignment, ScheduledOrder};
pub use types::{is_sentinel_stock_model, OrderType, UrgencyLevel, STOCK_MODEL_SENTINELS};
