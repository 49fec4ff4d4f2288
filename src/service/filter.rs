use crate::models::{FilterState, Identifier, Record, Selection, Summary};
use std::collections::{BTreeSet, HashSet};

/// 第一级: 延迟 >= 阈值 (日期缺失的记录永远不满足)
pub fn filter_by_delay<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    threshold: i64,
) -> Vec<&'a Record> {
    records
        .into_iter()
        .filter(|r| r.is_delayed_at_least(threshold))
        .collect()
}

/// 第二级: 供应商完全匹配
pub fn filter_by_vendor<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    vendor: &str,
) -> Vec<&'a Record> {
    records
        .into_iter()
        .filter(|r| r.supplier_name.as_deref() == Some(vendor))
        .collect()
}

/// 第三级: 采购单号完全匹配 (按文本比较)
pub fn filter_by_po<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    po: &Identifier,
) -> Vec<&'a Record> {
    records
        .into_iter()
        .filter(|r| r.purchasing_document.as_ref() == Some(po))
        .collect()
}

/// 供应商候选: 去重 + 字典序升序, 忽略缺失值
pub fn vendor_candidates<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<String> {
    records
        .into_iter()
        .filter_map(|r| r.supplier_name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// 采购单候选: 去重 + 字典序升序 (数字样式的单号不按数值排序)
pub fn po_candidates<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<Identifier> {
    records
        .into_iter()
        .filter_map(|r| r.purchasing_document.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// 延迟筛选结果的汇总计数
pub fn summarize<'a>(records: impl IntoIterator<Item = &'a Record>) -> Summary {
    let mut vendors = HashSet::new();
    let mut pos = HashSet::new();
    for r in records {
        if let Some(v) = &r.supplier_name {
            vendors.insert(v.as_str());
        }
        if let Some(po) = &r.purchasing_document {
            pos.insert(po.as_str());
        }
    }

    Summary {
        distinct_vendor_count: vendors.len(),
        distinct_po_count: pos.len(),
    }
}

/// 延迟阈值: 显式请求只截断负数; 默认值不超过批次上界
pub fn resolve_threshold(requested: Option<i64>, default_min_delay: i64, max_delay: i64) -> i64 {
    match requested {
        Some(threshold) => threshold.max(0),
        None => default_min_delay.clamp(0, max_delay.max(0)),
    }
}

/// 将请求中的供应商/采购单与候选列表对齐
///
/// 不在候选中时取第一个候选, 候选为空时为未选择。
pub fn resolve_selection(
    state: &FilterState,
    min_delay: i64,
    vendors: &[String],
    pos_for: impl FnOnce(&str) -> Vec<Identifier>,
) -> (Selection, Vec<Identifier>) {
    let supplier = pick(state.supplier.as_ref(), vendors);
    let po_list = supplier.as_deref().map(pos_for).unwrap_or_default();
    let po = pick(state.po.as_ref(), &po_list);

    (
        Selection {
            min_delay,
            supplier,
            po,
        },
        po_list,
    )
}

fn pick<T: Clone + PartialEq>(requested: Option<&T>, candidates: &[T]) -> Option<T> {
    requested
        .filter(|r| candidates.contains(*r))
        .or_else(|| candidates.first())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(po: &str, vendor: Option<&str>, delay: Option<i64>) -> Record {
        Record {
            purchasing_document: Some(Identifier::from(po)),
            supplier_name: vendor.map(str::to_string),
            document_date: None,
            delay_days: delay,
            short_text: None,
            pending_qty: None,
            order_unit: None,
        }
    }

    fn batch() -> Vec<Record> {
        vec![
            row("4500000010", Some("Beta Ltd"), Some(10)),
            row("4500000002", Some("Acme Corp"), Some(45)),
            row("4500000002", Some("Acme Corp"), Some(45)),
            row("900", Some("Acme Corp"), Some(80)),
            row("4500000003", None, Some(50)),
            row("4500000004", Some("Gamma"), None),
        ]
    }

    #[test]
    fn delay_filter_is_monotone_in_threshold() {
        let records = batch();
        for t1 in 0..=90 {
            for t2 in t1..=90 {
                let wide = filter_by_delay(&records, t1);
                let narrow = filter_by_delay(&records, t2);
                assert!(narrow.iter().all(|r| wide.iter().any(|w| std::ptr::eq(*w, *r))));
            }
        }
    }

    #[test]
    fn missing_delay_never_passes() {
        let records = batch();
        let delayed = filter_by_delay(&records, 0);
        assert_eq!(delayed.len(), 5);
        assert!(delayed.iter().all(|r| r.supplier_name.as_deref() != Some("Gamma")));
    }

    #[test]
    fn candidates_sort_as_text_and_skip_missing() {
        let records = batch();
        let delayed = filter_by_delay(&records, 30);
        assert_eq!(vendor_candidates(delayed.iter().copied()), vec!["Acme Corp"]);

        let acme = filter_by_vendor(delayed.iter().copied(), "Acme Corp");
        assert_eq!(
            po_candidates(acme.iter().copied()),
            vec![Identifier::from("4500000002"), Identifier::from("900")]
        );
    }

    #[test]
    fn cascade_outputs_are_nested() {
        let records = batch();
        let delayed = filter_by_delay(&records, 20);
        let vendor = filter_by_vendor(delayed.iter().copied(), "Acme Corp");
        let po = filter_by_po(vendor.iter().copied(), &Identifier::from("4500000002"));

        assert_eq!(po.len(), 2);
        assert!(po.iter().all(|r| vendor.iter().any(|v| std::ptr::eq(*v, *r))));
        assert!(vendor.iter().all(|r| delayed.iter().any(|d| std::ptr::eq(*d, *r))));
    }

    #[test]
    fn summary_counts_distinct_non_missing_values() {
        let records = batch();
        let summary = summarize(filter_by_delay(&records, 30));
        assert_eq!(
            summary,
            Summary {
                distinct_vendor_count: 1,
                distinct_po_count: 3,
            }
        );
        assert_eq!(summarize(Vec::<&Record>::new()), Summary::default());
    }

    #[test]
    fn empty_inputs_do_not_panic() {
        let empty: Vec<Record> = Vec::new();
        let delayed = filter_by_delay(&empty, 0);
        assert!(delayed.is_empty());
        assert!(vendor_candidates(delayed.iter().copied()).is_empty());
        assert!(filter_by_vendor(delayed.iter().copied(), "Acme Corp").is_empty());
        assert!(po_candidates(Vec::<&Record>::new()).is_empty());
    }

    #[test]
    fn threshold_defaults_within_bound_but_requests_are_kept() {
        assert_eq!(resolve_threshold(None, 30, 120), 30);
        assert_eq!(resolve_threshold(None, 30, 10), 10);
        assert_eq!(resolve_threshold(None, 30, -4), 0);
        assert_eq!(resolve_threshold(Some(90), 30, 60), 90);
        assert_eq!(resolve_threshold(Some(-5), 30, 60), 0);
    }

    #[test]
    fn resolve_keeps_valid_choices_and_defaults_otherwise() {
        let vendors = vec!["Acme Corp".to_string(), "Beta Ltd".to_string()];
        let pos = |v: &str| match v {
            "Beta Ltd" => vec![Identifier::from("1"), Identifier::from("2")],
            _ => vec![Identifier::from("9")],
        };

        let state = FilterState {
            min_delay: Some(40),
            supplier: Some("Beta Ltd".to_string()),
            po: Some(Identifier::from("2")),
        };
        let (selection, po_list) = resolve_selection(&state, 40, &vendors, pos);
        assert_eq!(selection.min_delay, 40);
        assert_eq!(selection.supplier.as_deref(), Some("Beta Ltd"));
        assert_eq!(selection.po, Some(Identifier::from("2")));
        assert_eq!(po_list.len(), 2);

        let stale = FilterState {
            min_delay: None,
            supplier: Some("Nobody".to_string()),
            po: Some(Identifier::from("2")),
        };
        let (selection, _) = resolve_selection(&stale, 30, &vendors, pos);
        assert_eq!(selection.supplier.as_deref(), Some("Acme Corp"));
        assert_eq!(selection.po, Some(Identifier::from("9")));
    }

    #[test]
    fn resolve_with_no_candidates_leaves_selection_unset() {
        let (selection, po_list) = resolve_selection(&FilterState::default(), 0, &[], |_| Vec::new());
        assert_eq!(selection.min_delay, 0);
        assert!(selection.supplier.is_none());
        assert!(selection.po.is_none());
        assert!(po_list.is_empty());
    }
}
