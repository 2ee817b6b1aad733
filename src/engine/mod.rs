// ==========================================
// 模具车间排产系统 - 引擎层
// ==========================================
// 职责: 实现排产业务规则,两段式流水线:
//       优先级判定/排序 -> 贪心产能分配
// 红线: 引擎不做持久化,所有可变状态生命周期不超过一次运行
// ==========================================

pub mod allocator;
pub mod capacity_tracker;
pub mod classifier;
pub mod ranker;
pub mod validation;

// 重导出核心引擎
pub use allocator::{ScheduleAllocator, MAX_ESTIMATED_HOURS, PRODUCTION_ORDER_HOURS};
pub use capacity_tracker::CapacityTracker;
pub use classifier::PriorityClassifier;
pub use ranker::PriorityRanker;
pub use validation::InputValidator;
