use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    let mut path =
        PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    path.push("tests/fixtures");
    path.push(name);
    path
}

/// Split a buffer of back to back datasets on their headers.
pub fn split_datasets(dat: &[u8]) -> Vec<&[u8]> {
    let mut datasets = Vec::new();
    let mut offset = 0;
    while offset < dat.len() {
        let hdr = adcp_ensemble::DatasetHeader::decode(&dat[offset..]).unwrap();
        let len = hdr.total_len(4).unwrap();
        datasets.push(&dat[offset..offset + len]);
        offset += len;
    }
    datasets
}
