// ==========================================
// 模具车间排产系统 - 排产分配引擎
// ==========================================
// 红线: 严格按优先级顺序贪心占位,高优先级订单先占槽位,
//       后续低优先级订单不得挤占已分配槽位
// ==========================================
// 职责: 准入过滤 + 贪心分配 (周 -> 工作日 -> 模具 -> 员工)
// 输入: 订单列表 + 模具/员工产能表 + 排产窗口配置
// 输出: 获得落位的订单列表 (无落位订单直接省略,非错误)
// ==========================================

use crate::config::{PriorityRuleConfig, ScheduleConfig};
use crate::domain::capacity::{EmployeeCapacity, MoldCapacity};
use crate::domain::order::{Order, ScheduledAssignment, ScheduledOrder};
use crate::domain::types::OrderType;
use crate::engine::capacity_tracker::CapacityTracker;
use crate::engine::ranker::PriorityRanker;
use crate::engine::validation::InputValidator;
use crate::error::SchedulingResult;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

// ==========================================
// 工时常量
// ==========================================

/// 生产订单预估工时 (小时)
pub const PRODUCTION_ORDER_HOURS: f64 = 5.0;

/// 单订单预估工时上限 (小时)
pub const MAX_ESTIMATED_HOURS: f64 = 8.0;

// ==========================================
// ScheduleAllocator - 排产分配引擎
// ==========================================
pub struct ScheduleAllocator {
    ranker: PriorityRanker,
}

impl ScheduleAllocator {
    /// 构造函数
    ///
    /// # 参数
    /// - `rules`: 优先级规则参数
    pub fn new(rules: PriorityRuleConfig) -> Self {
        Self {
            ranker: PriorityRanker::new(rules),
        }
    }

    /// 内部排序引擎
    pub fn ranker(&self) -> &PriorityRanker {
        &self.ranker
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成排产方案
    ///
    /// 流程:
    /// 1) 全排序 (PriorityRanker)
    /// 2) 准入过滤: 型号缺失/"none" 或部门不在白名单 => 出局
    /// 3) 按优先级逐单贪心搜索首个可行 (周, 工作日, 模具, 员工) 槽位并提交
    /// 4) 返回获得落位的订单;无落位订单省略,调用方对比输入集合即可区分
    ///
    /// 搜索顺序: 周 -> 工作日 -> 模具 -> 员工 (均按输入/配置声明顺序),
    /// 即最早可用槽位优先;优先级高者先占,后来者不得挤占。
    ///
    /// 本方法全函数 (total): 不抛错,坏配置仅表现为无产能可匹配。
    /// 台账在调用内部新建,多次调用之间无共享可变状态。
    #[instrument(skip(self, orders, molds, employees, config), fields(
        orders_count = orders.len(),
        molds_count = molds.len(),
        employees_count = employees.len(),
        start_date = %config.start_date,
        weeks = config.weeks_to_schedule
    ))]
    pub fn generate_schedule(
        &self,
        orders: Vec<Order>,
        molds: &[MoldCapacity],
        employees: &[EmployeeCapacity],
        config: &ScheduleConfig,
    ) -> Vec<ScheduledOrder> {
        info!("开始执行排产流程");

        // ==========================================
        // 步骤1: 全排序
        // ==========================================
        debug!("步骤1: 执行优先级排序");
        let ranked = self.ranker.rank(orders, config.start_date);
        let total = ranked.len();

        // ==========================================
        // 步骤2: 准入过滤
        // ==========================================
        debug!("步骤2: 执行准入过滤");
        let eligible: Vec<_> = ranked
            .into_iter()
            .filter(|(order, _)| Self::is_allocatable(order, config))
            .collect();

        info!(
            eligible_count = eligible.len(),
            dropped_count = total - eligible.len(),
            "准入过滤完成"
        );

        // ==========================================
        // 步骤3: 贪心分配
        // ==========================================
        debug!("步骤3: 执行贪心分配");

        // 型号 -> 候选模具索引 (保持输入顺序)
        let mold_index = Self::build_mold_index(molds);

        // 台账生命周期 = 本次调用
        let mut tracker = CapacityTracker::new(molds, employees);
        let mut scheduled = Vec::new();

        for (order, record) in eligible {
            let estimated_hours = Self::estimate_hours(record.order_type);

            // 准入过滤已排除型号缺失的订单
            let stock_model = match order.stock_model_id.as_deref() {
                Some(model) => model,
                None => continue,
            };

            // 无兼容模具 => 不可排,省略 (正常结果)
            let candidates = match mold_index.get(stock_model) {
                Some(molds) => molds,
                None => {
                    debug!(order_id = %order.order_id, stock_model, "无兼容模具,订单不可排");
                    continue;
                }
            };

            match self.find_first_feasible_slot(
                &mut tracker,
                candidates,
                employees,
                config,
                estimated_hours,
            ) {
                Some(assignment) => {
                    debug!(
                        order_id = %order.order_id,
                        week = %assignment.week,
                        day = assignment.day,
                        mold_id = %assignment.mold_id,
                        employee_id = %assignment.employee_id,
                        "订单落位"
                    );
                    scheduled.push(ScheduledOrder {
                        priority: record,
                        assignment,
                    });
                }
                None => {
                    debug!(order_id = %order.order_id, "搜索窗口内无可行槽位,订单未排");
                }
            }
        }

        info!(
            scheduled_count = scheduled.len(),
            "排产流程完成"
        );

        scheduled
    }

    /// 生成排产方案 (带输入校验)
    ///
    /// 先执行 InputValidator 的配置校验,失败时返回配置性错误;
    /// 校验通过后与 generate_schedule 行为一致。
    pub fn generate_schedule_checked(
        &self,
        orders: Vec<Order>,
        molds: &[MoldCapacity],
        employees: &[EmployeeCapacity],
        config: &ScheduleConfig,
    ) -> SchedulingResult<Vec<ScheduledOrder>> {
        let validator = InputValidator::new();
        validator.validate_all(molds, employees, config)?;
        Ok(self.generate_schedule(orders, molds, employees, config))
    }

    // ==========================================
    // 准入规则
    // ==========================================

    /// 准入判定
    ///
    /// 规则:
    /// 1) 型号缺失/空串/"none" (不区分大小写) => 永远分配不到模具,出局
    /// 2) 部门必须在白名单内,或订单尚无部门;已流转到下游的订单不由本核心重排
    fn is_allocatable(order: &Order, config: &ScheduleConfig) -> bool {
        let has_usable_model = match order.stock_model_id.as_deref() {
            Some(model) if !model.is_empty() => !model.eq_ignore_ascii_case("none"),
            _ => false,
        };
        if !has_usable_model {
            return false;
        }

        config.is_department_allowed(order.department.as_deref())
    }

    /// 预估工时
    ///
    /// - PRODUCTION_ORDER => 5 小时
    /// - NEEDS_INFORMATION => 0 小时 (准入过滤只拦 "none" 哨兵,
    ///   "unprocessed"/"universal" 订单仍会走到这里,随后因无兼容模具出局)
    ///
    /// 统一压到 8 小时上限。
    pub fn estimate_hours(order_type: OrderType) -> f64 {
        let hours = match order_type {
            OrderType::ProductionOrder => PRODUCTION_ORDER_HOURS,
            OrderType::NeedsInformation => 0.0,
        };
        hours.min(MAX_ESTIMATED_HOURS)
    }

    // ==========================================
    // 贪心搜索
    // ==========================================

    /// 型号 -> 兼容模具索引 (模具保持输入顺序)
    fn build_mold_index(molds: &[MoldCapacity]) -> HashMap<&str, Vec<&MoldCapacity>> {
        let mut index: HashMap<&str, Vec<&MoldCapacity>> = HashMap::new();
        for mold in molds {
            for model in &mold.compatible_stock_models {
                index.entry(model.as_str()).or_default().push(mold);
            }
        }
        index
    }

    /// 搜索首个可行槽位并提交产能
    ///
    /// 搜索顺序: 周 (0..weeks_to_schedule) -> 配置工作日 -> 候选模具 -> 员工,
    /// 首个同时满足模具件数与员工工时的组合即提交 (各提交恰好一次)。
    fn find_first_feasible_slot(
        &self,
        tracker: &mut CapacityTracker,
        candidates: &[&MoldCapacity],
        employees: &[EmployeeCapacity],
        config: &ScheduleConfig,
        estimated_hours: f64,
    ) -> Option<ScheduledAssignment> {
        for week_offset in 0..config.weeks_to_schedule {
            let week = config.week_label(week_offset);

            for &day in &config.work_days {
                for mold in candidates {
                    if !tracker.has_mold_capacity(&mold.mold_id, &week, day, 1) {
                        continue;
                    }

                    for employee in employees {
                        if !tracker.has_employee_capacity(
                            &employee.employee_id,
                            &week,
                            day,
                            estimated_hours,
                        ) {
                            continue;
                        }

                        // 可行槽位: 提交恰好一次
                        tracker.commit_mold(&mold.mold_id, &week, day, 1);
                        tracker.commit_employee(
                            &employee.employee_id,
                            &week,
                            day,
                            estimated_hours,
                        );

                        return Some(ScheduledAssignment {
                            week,
                            day,
                            mold_id: mold.mold_id.clone(),
                            employee_id: employee.employee_id.clone(),
                            estimated_hours,
                        });
                    }
                }
            }
        }

        None
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for ScheduleAllocator {
    fn default() -> Self {
        Self::new(PriorityRuleConfig::default())
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::UrgencyLevel;
    use chrono::{Duration, NaiveDate};
    use std::collections::HashMap as StdHashMap;

    // ==========================================
    // 测试数据准备
    // ==========================================

    /// 基准日期: 2026-01-19 (周一, ISO 2026-W04)
    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 19).unwrap()
    }

    fn base_config() -> ScheduleConfig {
        ScheduleConfig {
            work_days: vec![1, 2, 3, 4],
            start_date: start_date(),
            weeks_to_schedule: 4,
            department_whitelist: vec![
                "P1 Production Queue".to_string(),
                "Layup".to_string(),
                "Plugging".to_string(),
            ],
        }
    }

    fn order(order_id: &str, stock_model: Option<&str>, due_days: Option<i64>) -> Order {
        Order {
            order_id: order_id.to_string(),
            customer_id: None,
            stock_model_id: stock_model.map(|s| s.to_string()),
            department: Some("Layup".to_string()),
            due_date: due_days.map(|d| start_date() + Duration::days(d)),
            order_date: None,
            attributes: StdHashMap::new(),
        }
    }

    fn mold(mold_id: &str, daily_capacity: u32, models: &[&str]) -> MoldCapacity {
        MoldCapacity {
            mold_id: mold_id.to_string(),
            daily_capacity,
            compatible_stock_models: models.iter().map(|m| m.to_string()).collect(),
        }
    }

    fn employee(employee_id: &str, daily_hours: f64, days: &[u32]) -> EmployeeCapacity {
        EmployeeCapacity {
            employee_id: employee_id.to_string(),
            daily_hours,
            available_days: days.to_vec(),
        }
    }

    // ==========================================
    // 第一部分: 基准场景 (Reference Scenarios)
    // ==========================================

    #[test]
    fn test_scenario_1_single_order_first_slot() {
        // 场景1: 今日交期 + cf-123 + mold-A(日产能1) + 周一员工8小时
        // => score=40, CRITICAL, 落位第0周首个工作日, mold-A, 5小时
        let allocator = ScheduleAllocator::default();
        let molds = vec![mold("mold-A", 1, &["cf-123"])];
        let employees = vec![employee("emp-1", 8.0, &[1])];
        let mut config = base_config();
        config.work_days = vec![1];

        let result = allocator.generate_schedule(
            vec![order("ORD-001", Some("cf-123"), Some(0))],
            &molds,
            &employees,
            &config,
        );

        assert_eq!(result.len(), 1);
        let scheduled = &result[0];
        assert_eq!(scheduled.priority.priority_score, 40.0, "50 - 10 + 0.1*0 = 40");
        assert_eq!(scheduled.priority.urgency_level, UrgencyLevel::Critical);
        assert_eq!(scheduled.assignment.week, "2026-W04", "落位起始周");
        assert_eq!(scheduled.assignment.day, 1, "首个配置工作日");
        assert_eq!(scheduled.assignment.mold_id, "mold-A");
        assert_eq!(scheduled.assignment.employee_id, "emp-1");
        assert_eq!(scheduled.assignment.estimated_hours, 5.0);
    }

    #[test]
    fn test_scenario_2_universal_order_excluded() {
        // 场景2: universal 型号 => NEEDS_INFORMATION,通过准入过滤但无兼容模具,
        // 不出现在排产结果中
        let allocator = ScheduleAllocator::default();
        let molds = vec![mold("mold-A", 2, &["cf-123"])];
        let employees = vec![employee("emp-1", 8.0, &[1, 2, 3, 4])];

        let result = allocator.generate_schedule(
            vec![order("ORD-001", Some("universal"), Some(0))],
            &molds,
            &employees,
            &base_config(),
        );

        assert!(result.is_empty(), "universal 订单无模具匹配,应省略");
    }

    // ==========================================
    // 第二部分: 准入过滤 (Eligibility)
    // ==========================================

    #[test]
    fn test_scenario_3_sentinel_stock_models_never_scheduled() {
        // 场景3: "None"/"none"/""/缺失 的订单永不出现在输出中
        let allocator = ScheduleAllocator::default();
        let molds = vec![mold("mold-A", 10, &["None", "none", ""])]; // 即使模具表被错误配置
        let employees = vec![employee("emp-1", 8.0, &[1, 2, 3, 4])];

        let orders = vec![
            order("ORD-001", Some("None"), Some(0)),
            order("ORD-002", Some("none"), Some(0)),
            order("ORD-003", Some(""), Some(0)),
            order("ORD-004", None, Some(0)),
        ];

        let result = allocator.generate_schedule(orders, &molds, &employees, &base_config());
        assert!(result.is_empty(), "哨兵/缺失型号订单永不落位");
    }

    #[test]
    fn test_scenario_4_department_whitelist() {
        // 场景4: 白名单外部门出局,无部门视为通过
        let allocator = ScheduleAllocator::default();
        let molds = vec![mold("mold-A", 10, &["cf-123"])];
        let employees = vec![employee("emp-1", 8.0, &[1, 2, 3, 4])];

        let mut downstream = order("ORD-001", Some("cf-123"), Some(0));
        downstream.department = Some("Finishing".to_string());

        let mut no_department = order("ORD-002", Some("cf-123"), Some(0));
        no_department.department = None;

        let in_queue = order("ORD-003", Some("cf-123"), Some(0)); // Layup

        let result = allocator.generate_schedule(
            vec![downstream, no_department, in_queue],
            &molds,
            &employees,
            &base_config(),
        );

        let ids: Vec<&str> = result.iter().map(|s| s.order_id()).collect();
        assert!(!ids.contains(&"ORD-001"), "下游部门订单不重排");
        assert!(ids.contains(&"ORD-002"), "无部门订单视为通过");
        assert!(ids.contains(&"ORD-003"));
    }

    #[test]
    fn test_scenario_5_no_compatible_mold_omitted() {
        // 场景5: 无兼容模具 => 省略,非错误
        let allocator = ScheduleAllocator::default();
        let molds = vec![mold("mold-A", 10, &["cf-999"])];
        let employees = vec![employee("emp-1", 8.0, &[1, 2, 3, 4])];

        let result = allocator.generate_schedule(
            vec![order("ORD-001", Some("cf-123"), Some(0))],
            &molds,
            &employees,
            &base_config(),
        );

        assert!(result.is_empty());
    }

    // ==========================================
    // 第三部分: 贪心占位 (Greedy Allocation)
    // ==========================================

    #[test]
    fn test_scenario_6_greedy_priority_wins_single_slot() {
        // 场景6: 两单争夺唯一槽位,分数低者得,另一单无处可去
        let allocator = ScheduleAllocator::default();
        let molds = vec![mold("mold-A", 1, &["cf-123"])];
        let employees = vec![employee("emp-1", 8.0, &[1])];
        let mut config = base_config();
        config.work_days = vec![1];
        config.weeks_to_schedule = 1; // 仅一个槽位

        let result = allocator.generate_schedule(
            vec![
                order("ORD-LOW", Some("cf-123"), Some(9)),  // MEDIUM: 50+0+0.9 = 50.9
                order("ORD-HIGH", Some("cf-123"), Some(0)), // CRITICAL: 40
            ],
            &molds,
            &employees,
            &config,
        );

        assert_eq!(result.len(), 1, "唯一槽位只容一单");
        assert_eq!(result[0].order_id(), "ORD-HIGH", "低分(高优先级)订单占槽");
    }

    #[test]
    fn test_scenario_7_loser_takes_later_slot() {
        // 场景7: 竞争失败者顺延到下一个可行槽位
        let allocator = ScheduleAllocator::default();
        let molds = vec![mold("mold-A", 1, &["cf-123"])];
        let employees = vec![employee("emp-1", 8.0, &[1, 2])];
        let mut config = base_config();
        config.work_days = vec![1, 2];

        let result = allocator.generate_schedule(
            vec![
                order("ORD-LOW", Some("cf-123"), Some(9)),
                order("ORD-HIGH", Some("cf-123"), Some(0)),
            ],
            &molds,
            &employees,
            &config,
        );

        assert_eq!(result.len(), 2);
        let high = result.iter().find(|s| s.order_id() == "ORD-HIGH").unwrap();
        let low = result.iter().find(|s| s.order_id() == "ORD-LOW").unwrap();
        assert_eq!((high.assignment.week.as_str(), high.assignment.day), ("2026-W04", 1));
        assert_eq!((low.assignment.week.as_str(), low.assignment.day), ("2026-W04", 2));
    }

    #[test]
    fn test_scenario_8_employee_hours_spill_to_next_day() {
        // 场景8: 员工日工时耗尽驱动顺延 (8小时/天,每单5小时 => 每天一单)
        let allocator = ScheduleAllocator::default();
        let molds = vec![mold("mold-A", 10, &["cf-123"])];
        let employees = vec![employee("emp-1", 8.0, &[1, 2, 3, 4])];

        let result = allocator.generate_schedule(
            vec![
                order("ORD-001", Some("cf-123"), Some(0)),
                order("ORD-002", Some("cf-123"), Some(1)),
                order("ORD-003", Some("cf-123"), Some(2)),
            ],
            &molds,
            &employees,
            &base_config(),
        );

        assert_eq!(result.len(), 3);
        let days: Vec<u32> = result.iter().map(|s| s.assignment.day).collect();
        assert_eq!(days, vec![1, 2, 3], "5+5>8,每天只容一单,逐日顺延");
    }

    #[test]
    fn test_scenario_9_week_spill() {
        // 场景9: 整周产能耗尽后进入下一周
        let allocator = ScheduleAllocator::default();
        let molds = vec![mold("mold-A", 1, &["cf-123"])];
        let employees = vec![employee("emp-1", 8.0, &[1])];
        let mut config = base_config();
        config.work_days = vec![1]; // 每周仅一个槽位

        let result = allocator.generate_schedule(
            vec![
                order("ORD-001", Some("cf-123"), Some(0)),
                order("ORD-002", Some("cf-123"), Some(1)),
            ],
            &molds,
            &employees,
            &config,
        );

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].assignment.week, "2026-W04");
        assert_eq!(result[1].assignment.week, "2026-W05", "下一周顺延");
    }

    #[test]
    fn test_scenario_10_window_exhausted_order_unscheduled() {
        // 场景10: 搜索窗口耗尽,超量订单留空 (省略,非错误)
        let allocator = ScheduleAllocator::default();
        let molds = vec![mold("mold-A", 1, &["cf-123"])];
        let employees = vec![employee("emp-1", 8.0, &[1])];
        let mut config = base_config();
        config.work_days = vec![1];
        config.weeks_to_schedule = 2; // 共2个槽位

        let orders = (1..=3)
            .map(|i| order(&format!("ORD-00{}", i), Some("cf-123"), Some(i)))
            .collect();

        let result = allocator.generate_schedule(orders, &molds, &employees, &config);
        assert_eq!(result.len(), 2, "窗口内仅2个槽位");
    }

    // ==========================================
    // 第四部分: 产能约束与确定性 (Constraints & Determinism)
    // ==========================================

    #[test]
    fn test_scenario_11_capacity_never_exceeded() {
        // 场景11: 任意 (模具,周,工作日) 格件数不超日产能;员工工时同理
        let allocator = ScheduleAllocator::default();
        let molds = vec![mold("mold-A", 2, &["cf-123"]), mold("mold-B", 1, &["cf-123"])];
        let employees = vec![
            employee("emp-1", 8.0, &[1, 2, 3, 4]),
            employee("emp-2", 6.0, &[1, 3]),
        ];

        let orders = (0..20)
            .map(|i| order(&format!("ORD-{:03}", i), Some("cf-123"), Some(i)))
            .collect();

        let result = allocator.generate_schedule(orders, &molds, &employees, &base_config());

        // 按格聚合校验
        let mut mold_cells: StdHashMap<(String, String, u32), u32> = StdHashMap::new();
        let mut employee_cells: StdHashMap<(String, String, u32), f64> = StdHashMap::new();
        for s in &result {
            *mold_cells
                .entry((s.assignment.mold_id.clone(), s.assignment.week.clone(), s.assignment.day))
                .or_insert(0) += 1;
            *employee_cells
                .entry((
                    s.assignment.employee_id.clone(),
                    s.assignment.week.clone(),
                    s.assignment.day,
                ))
                .or_insert(0.0) += s.assignment.estimated_hours;
        }

        for ((mold_id, _, _), units) in &mold_cells {
            let cap = molds.iter().find(|m| &m.mold_id == mold_id).unwrap().daily_capacity;
            assert!(*units <= cap, "模具 {} 单格件数 {} 超出日产能 {}", mold_id, units, cap);
        }
        for ((employee_id, _, day), hours) in &employee_cells {
            let emp = employees.iter().find(|e| &e.employee_id == employee_id).unwrap();
            assert!(*hours <= emp.daily_hours, "员工 {} 单格工时超限", employee_id);
            assert!(emp.available_days.contains(day), "员工 {} 占用了不可用工作日", employee_id);
        }
    }

    #[test]
    fn test_scenario_12_generate_schedule_deterministic() {
        // 场景12: 同一输入快照生成两次,结果完全一致
        let allocator = ScheduleAllocator::default();
        let molds = vec![mold("mold-A", 1, &["cf-123", "cf-456"])];
        let employees = vec![employee("emp-1", 8.0, &[1, 2, 3, 4])];

        let orders: Vec<Order> = vec![
            order("ORD-002", Some("cf-456"), Some(3)),
            order("ORD-001", Some("cf-123"), Some(3)),
            order("ORD-003", Some("cf-123"), None),
        ];

        let first = allocator.generate_schedule(orders.clone(), &molds, &employees, &base_config());
        let second = allocator.generate_schedule(orders, &molds, &employees, &base_config());
        assert_eq!(first, second, "排产结果必须确定性");
    }

    #[test]
    fn test_scenario_13_mold_search_follows_input_order() {
        // 场景13: 同日多个可行模具时,取输入顺序首个 (先到先得,无负载均衡)
        let allocator = ScheduleAllocator::default();
        let molds = vec![
            mold("mold-B", 5, &["cf-123"]),
            mold("mold-A", 5, &["cf-123"]),
        ];
        let employees = vec![employee("emp-1", 8.0, &[1, 2, 3, 4])];

        let result = allocator.generate_schedule(
            vec![order("ORD-001", Some("cf-123"), Some(0))],
            &molds,
            &employees,
            &base_config(),
        );

        assert_eq!(result[0].assignment.mold_id, "mold-B", "输入顺序首个可行模具");
    }

    #[test]
    fn test_scenario_14_checked_entry_rejects_bad_config() {
        // 场景14: 带校验入口对坏配置报错,核心入口保持全函数
        let allocator = ScheduleAllocator::default();
        let bad_molds = vec![mold("mold-A", 0, &["cf-123"])]; // 零产能
        let employees = vec![employee("emp-1", 8.0, &[1])];

        let checked = allocator.generate_schedule_checked(
            vec![order("ORD-001", Some("cf-123"), Some(0))],
            &bad_molds,
            &employees,
            &base_config(),
        );
        assert!(checked.is_err(), "零产能模具应被校验拦截");

        // 核心入口不抛错: 坏行仅表现为排不上产
        let silent = allocator.generate_schedule(
            vec![order("ORD-001", Some("cf-123"), Some(0))],
            &bad_molds,
            &employees,
            &base_config(),
        );
        assert!(silent.is_empty());
    }
}
