// ==========================================
// 模具车间排产系统 - 错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 排不上产不是错误 (§正常结果);此处仅覆盖配置性错误,
//       供显式校验入口 (InputValidator / generate_schedule_checked) 使用
// ==========================================

use thiserror::Error;

/// 排产核心错误类型
#[derive(Error, Debug)]
pub enum SchedulingError {
    // ===== 产能配置错误 =====
    #[error("模具日产能无效: mold_id={mold_id}, daily_capacity={daily_capacity}")]
    InvalidMoldCapacity { mold_id: String, daily_capacity: u32 },

    #[error("模具未配置兼容型号: mold_id={0}")]
    EmptyCompatibleModels(String),

    #[error("员工日工时无效: employee_id={employee_id}, daily_hours={daily_hours}")]
    InvalidEmployeeHours {
        employee_id: String,
        daily_hours: f64,
    },

    #[error("员工未配置可用工作日: employee_id={0}")]
    EmptyAvailableDays(String),

    #[error("无效的工作日编号: employee_id={employee_id}, day={day} (合法范围 1..=5)")]
    InvalidAvailableDay { employee_id: String, day: u32 },

    // ===== 排产窗口配置错误 =====
    #[error("无效的排产工作日: day={0} (合法范围 1..=5)")]
    InvalidWorkDay(u32),

    #[error("排产工作日列表为空")]
    EmptyWorkDays,

    #[error("排产窗口为空: weeks_to_schedule 必须大于 0")]
    EmptyScheduleWindow,

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type SchedulingResult<T> = Result<T, SchedulingError>;
