//! 扫描 + 分类 + 过滤 全流程集成测试

use std::io::Write;

use nalscan::codec::{Disposition, ExcludeSet, NalSyntax, NameTable, UnitInspector};
use nalscan::core::{NalError, NalResult};
use nalscan::format::{InputSource, NalScanner, ScanConfig};

/// 把若干 NAL 单元拼成 Annex-B 码流, 每个单元后附一个填充字节, 末尾再加一个起始码
fn build_stream(units: &[&[u8]]) -> Vec<u8> {
    let mut data = Vec::new();
    for unit in units {
        data.extend_from_slice(&[0x00, 0x00, 0x01]);
        data.extend_from_slice(unit);
        data.push(0x00);
    }
    data.extend_from_slice(&[0x00, 0x00, 0x01]);
    data
}

/// 返回 (序号, 判定) 列表中需要输出的部分
fn reported(data: &[u8], inspector: &UnitInspector) -> Vec<(u64, u8, usize, String)> {
    NalScanner::new(data, &ScanConfig::default())
        .unwrap()
        .map(|unit| unit.unwrap())
        .filter_map(|unit| match inspector.inspect(&unit.data) {
            Disposition::Report { type_id, name } => {
                Some((unit.index, type_id, unit.len(), name.to_string()))
            }
            _ => None,
        })
        .collect()
}

#[test]
fn test_h264_report_with_exclusion() {
    let data = build_stream(&[
        &[0x09, 0xF0],             // AUD, 未命名
        &[0x67, 0x42, 0x00, 0x1E], // SPS
        &[0x68, 0xCE, 0x38, 0x80], // PPS
        &[0x06, 0x05, 0x10],       // SEI
        &[0x65, 0x88, 0x84],       // IDR
        &[0x01, 0x9A, 0x02],       // 非 IDR, 被排除
        &[0x41, 0x9A, 0x03],       // 非 IDR (ref_idc=2), 被排除
    ]);
    let inspector = UnitInspector::with_builtin_names(NalSyntax::H264, ExcludeSet::parse("1"));
    let lines = reported(&data, &inspector);

    // 序号不受排除与命名影响
    assert_eq!(
        lines,
        vec![
            (1, 7, 4, "sequence parameter set".to_string()),
            (2, 8, 4, "picture parameter set".to_string()),
            (3, 6, 3, "supplemental enhancement information".to_string()),
            (4, 5, 3, "    idr coded picture".to_string()),
        ]
    );
}

#[test]
fn test_hevc_report() {
    let data = build_stream(&[
        &[0x40, 0x01, 0x0C], // VPS (32)
        &[0x42, 0x01, 0x01], // SPS (33)
        &[0x44, 0x01, 0xC1], // PPS (34)
        &[0x4E, 0x01, 0x05], // PREFIX_SEI (39), 未命名
        &[0x26, 0x01, 0xAF], // IDR_W_RADL (19)
        &[0x02, 0x01, 0xD0], // TRAIL_R (1)
    ]);
    let inspector = UnitInspector::with_builtin_names(NalSyntax::Hevc, ExcludeSet::new());
    let types: Vec<(u64, u8)> = reported(&data, &inspector)
        .into_iter()
        .map(|(index, type_id, _, _)| (index, type_id))
        .collect();
    assert_eq!(types, vec![(0, 32), (1, 33), (2, 34), (4, 19), (5, 1)]);
}

#[test]
fn test_excluded_and_named_never_reported() {
    let data = build_stream(&[&[0x67, 0x42], &[0x68, 0xCE]]);
    let inspector = UnitInspector::with_builtin_names(NalSyntax::H264, ExcludeSet::parse("7,8"));
    assert!(reported(&data, &inspector).is_empty());
}

#[test]
fn test_custom_name_table() {
    let data = build_stream(&[&[0x09, 0xF0], &[0x67, 0x42]]);
    let names: NameTable = [(9u8, "access unit delimiter")].into_iter().collect();
    let inspector = UnitInspector::new(NalSyntax::H264, ExcludeSet::new(), names);
    let lines = reported(&data, &inspector);
    assert_eq!(lines, vec![(0, 9, 2, "access unit delimiter".to_string())]);
}

#[test]
fn test_scan_from_file() {
    let data = build_stream(&[&[0x67, 0x42, 0x00], &[0x68, 0xCE], &[0x65, 0x88]]);
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(&data).unwrap();
    tmp.flush().unwrap();

    let path = tmp.path().to_str().unwrap().to_string();
    let source = InputSource::from_args(&[path]).unwrap();
    assert!(!source.is_stdin());

    let config = ScanConfig {
        read_chunk_size: 3,
        ..Default::default()
    };
    let units = NalScanner::new(source, &config)
        .unwrap()
        .collect::<NalResult<Vec<_>>>()
        .unwrap();
    assert_eq!(units.len(), 3);
    assert_eq!(&units[0].data[..], &[0x67, 0x42, 0x00]);
    assert_eq!(&units[2].data[..], &[0x65, 0x88]);
}

#[test]
fn test_unit_too_large_is_fatal() {
    let mut payload = vec![0x65];
    payload.extend(std::iter::repeat_n(0x5A, 4096));
    let data = build_stream(&[&[0x67, 0x42], &payload]);

    let config = ScanConfig {
        read_chunk_size: 256,
        max_unit_size: 1024,
        ..Default::default()
    };
    let results: Vec<NalResult<_>> = NalScanner::new(&data[..], &config).unwrap().collect();
    // SPS 正常产生, 随后的大单元导致扫描终止
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(NalError::UnitTooLarge { limit: 1024 })
    ));
}
