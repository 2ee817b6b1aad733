// ==========================================
// 模具车间排产系统 - 配置层
// ==========================================
// 职责: 排产规则与窗口配置,调用方显式构造并注入
// 红线: 无进程级单例,配置在单次运行内不可变
// ==========================================

pub mod priority_rules;
pub mod schedule_config;

// 重导出核心配置
pub use priority_rules::{PriorityRuleConfig, UrgencyBonus};
pub use schedule_config::ScheduleConfig;
