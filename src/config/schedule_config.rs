// ==========================================
// 模具车间排产系统 - 排产窗口配置
// ==========================================
// 用途: ScheduleAllocator 输入之一,单次运行内不可变
// ==========================================

use chrono::{Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 排产窗口与准入配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// 可排产工作日 (1=周一..5=周五),按声明顺序搜索
    #[serde(default = "default_work_days")]
    pub work_days: Vec<u32>,

    /// 排产窗口起始日期 (排产快照的"当前时刻")
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,

    /// 排产窗口周数
    #[serde(default = "default_weeks_to_schedule")]
    pub weeks_to_schedule: u32,

    /// 部门准入白名单 (订单无部门时视为通过)
    #[serde(default = "default_department_whitelist")]
    pub department_whitelist: Vec<String>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            work_days: default_work_days(),
            start_date: default_start_date(),
            weeks_to_schedule: default_weeks_to_schedule(),
            department_whitelist: default_department_whitelist(),
        }
    }
}

fn default_work_days() -> Vec<u32> {
    vec![1, 2, 3, 4] // 周一至周四
}

fn default_start_date() -> NaiveDate {
    Utc::now().date_naive()
}

fn default_weeks_to_schedule() -> u32 {
    4
}

fn default_department_whitelist() -> Vec<String> {
    vec![
        "P1 Production Queue".to_string(),
        "Layup".to_string(),
        "Plugging".to_string(),
    ]
}

impl ScheduleConfig {
    /// 计算第 offset 周的 ISO 周标签
    ///
    /// 标签取 start_date + 7*offset 天所在的 ISO 周,
    /// start_date 落在周中时,产能格仍按 ISO 周对齐。
    ///
    /// # 返回
    /// "YYYY-W##" 格式周标签
    pub fn week_label(&self, offset: u32) -> String {
        let date = self.start_date + Duration::weeks(offset as i64);
        let iso = date.iso_week();
        format!("{}-W{:02}", iso.year(), iso.week())
    }

    /// 检查订单部门是否通过准入白名单
    ///
    /// # 参数
    /// - `department`: 订单当前生产部门 (None = 未进入流程,视为通过)
    pub fn is_department_allowed(&self, department: Option<&str>) -> bool {
        match department {
            Some(dept) => self.department_whitelist.iter().any(|d| d == dept),
            None => true,
        }
    }
}
