//! 答案计算服务 - 业务能力层
//!
//! 把下载到的工作簿解析成表格，对 value 列求和

use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Range, Reader, Xlsx};
use tracing::debug;

use crate::error::{ChainError, ChainResult};

/// 数据所在的工作表索引；题目格式固定把数据表放在第二个工作表
const DATA_SHEET_INDEX: usize = 1;

/// 求和目标列的表头名，匹配时忽略大小写和首尾空白
const VALUE_COLUMN: &str = "value";

/// 答案计算服务
pub struct AnswerComputer;

impl AnswerComputer {
    pub fn new() -> Self {
        Self
    }

    /// 解析工作簿并对数据表的 value 列求和
    pub fn compute(&self, bytes: &[u8]) -> ChainResult<f64> {
        let cursor = Cursor::new(bytes);
        let mut workbook: Xlsx<_> = open_workbook_from_rs(cursor)
            .map_err(|e: calamine::XlsxError| ChainError::InvalidWorkbook(e.to_string()))?;

        let range = workbook
            .worksheet_range_at(DATA_SHEET_INDEX)
            .ok_or_else(|| {
                ChainError::InvalidWorkbook(format!("缺少第 {} 个工作表", DATA_SHEET_INDEX + 1))
            })?
            .map_err(|e| ChainError::InvalidWorkbook(e.to_string()))?;

        debug!("数据工作表: {} 行 x {} 列", range.height(), range.width());

        sum_value_column(&range)
    }
}

impl Default for AnswerComputer {
    fn default() -> Self {
        Self::new()
    }
}

/// 第一行为表头，对表头匹配 value 的那一列求和
///
/// 无法转成数字的单元格不参与求和，也不按 0 计；
/// 全列都无法转换时结果是 0.0
fn sum_value_column(range: &Range<Data>) -> ChainResult<f64> {
    let mut rows = range.rows();
    let header = rows.next().ok_or(ChainError::MissingValueColumn)?;

    let value_idx = header
        .iter()
        .position(|cell| cell.to_string().trim().eq_ignore_ascii_case(VALUE_COLUMN))
        .ok_or(ChainError::MissingValueColumn)?;

    let mut sum = 0.0;
    for row in rows {
        if let Some(v) = row.get(value_idx).and_then(cell_to_number) {
            sum += v;
        }
    }
    Ok(sum)
}

fn cell_to_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        Data::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT_XLSX: &[u8] = include_bytes!("../../tests/fixtures/quiz_report.xlsx");

    /// 用字符串单元格拼一个内存表格
    fn table(cells: &[&[&str]]) -> Range<Data> {
        let rows = cells.len() as u32;
        let cols = cells[0].len() as u32;
        let mut range = Range::new((0, 0), (rows - 1, cols - 1));
        for (r, row) in cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), Data::String((*cell).to_string()));
            }
        }
        range
    }

    #[test]
    fn sums_numeric_column_exactly() {
        let range = table(&[&["id", "value"], &["1", "10"], &["2", "2.5"]]);
        let sum = sum_value_column(&range).unwrap();
        assert!((sum - 12.5).abs() < 1e-9);
    }

    #[test]
    fn non_coercible_cells_are_excluded() {
        let range = table(&[&["id", "value"], &["1", "10"], &["2", "x"], &["3", "5.5"]]);
        let sum = sum_value_column(&range).unwrap();
        assert!((sum - 15.5).abs() < 1e-9);
    }

    #[test]
    fn header_match_ignores_case_and_whitespace() {
        for header in ["Value", " VALUE ", "value"] {
            let range = table(&[&["id", header], &["1", "3"]]);
            let sum = sum_value_column(&range).unwrap();
            assert!((sum - 3.0).abs() < 1e-9, "表头 {:?} 应当能匹配", header);
        }
    }

    #[test]
    fn missing_value_header_is_an_error() {
        let range = table(&[&["id", "amount"], &["1", "10"]]);
        let err = sum_value_column(&range).unwrap_err();
        assert!(matches!(err, ChainError::MissingValueColumn));
    }

    #[test]
    fn all_excluded_column_sums_to_zero() {
        let range = table(&[&["id", "value"], &["1", "a"], &["2", "b"]]);
        let sum = sum_value_column(&range).unwrap();
        assert_eq!(sum, 0.0);
    }

    #[test]
    fn mixed_cell_types_are_coerced() {
        let mut range = Range::new((0, 0), (3, 0));
        range.set_value((0, 0), Data::String("value".to_string()));
        range.set_value((1, 0), Data::Int(4));
        range.set_value((2, 0), Data::Float(1.5));
        range.set_value((3, 0), Data::Bool(true));
        let sum = sum_value_column(&range).unwrap();
        assert!((sum - 5.5).abs() < 1e-9);
    }

    #[test]
    fn computes_answer_from_workbook_bytes() {
        // 数据在第二个工作表: [[id,value],[1,10],[2,abc],[3,5]]
        let answer = AnswerComputer::new().compute(REPORT_XLSX).unwrap();
        assert!((answer - 15.0).abs() < 1e-9);
    }

    #[test]
    fn garbage_bytes_are_not_a_workbook() {
        let err = AnswerComputer::new().compute(b"not a workbook").unwrap_err();
        assert!(matches!(err, ChainError::InvalidWorkbook(_)));
    }
}
