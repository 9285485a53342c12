use fatmeta::{DirEntry, Geometry, Timestamp};

pub fn geometry(geometry: &Geometry) {
    println!("Sectors per cluster: {}", geometry.sectors_per_cluster);
    println!("Bytes per sector: {}", geometry.bytes_per_sector);
    println!("Size of reserved area, in sectors: {}", geometry.reserved_sectors);
    println!("Number of FATs: {}", geometry.fat_count);
    println!("Max entries in root: {}", geometry.root_max_entries);
    println!("Size of root, in bytes: {}", geometry.root_directory_bytes());
    println!(
        "Size of each FAT, in sectors: {}, in bytes: {}",
        geometry.sectors_per_fat,
        geometry.fat_bytes()
    );
    println!("Total sectors: {}", geometry.total_sectors);
    if let Some(label) = &geometry.volume_label {
        println!("Volume label: {}", label);
    }
    if geometry.signature_valid() {
        println!("Signature is correct");
    } else {
        println!("Signature is wrong: {:#06X}", geometry.boot_signature);
    }
}

pub fn entry(entry: &DirEntry) {
    let attrs = &entry.attributes;
    if attrs.is_long_name() {
        println!("------ <long-name slot>");
        return;
    }
    print!("{}", if attrs.directory() > 0 { "d" } else { "-" });
    print!("{}", if attrs.read_only() > 0 { "r" } else { "-" });
    print!("{}", if attrs.system() > 0 { "s" } else { "-" });
    print!("{}", if attrs.hidden() > 0 { "h" } else { "-" });
    print!("{}", if attrs.volume_label() > 0 { "v" } else { "-" });
    print!("{}", if attrs.archive() > 0 { "a" } else { "-" });
    print!(" {:9}", entry.file_size);
    print!(" cluster {:5}", entry.first_cluster);
    print!(" created {}", timestamp(&entry.created));
    print!(" modified {}", timestamp(&entry.modified));
    if entry.is_directory() {
        println!(" {}/", entry.name());
    } else {
        println!(" {}", entry.name());
    }
}

fn timestamp(stamp: &Timestamp) -> String {
    format!(
        "{}/{}/{} {}:{:02}:{:02}",
        stamp.date.day(),
        stamp.date.month(),
        stamp.date.year(),
        stamp.time.hour(),
        stamp.time.minute(),
        stamp.time.second()
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use fatmeta::{DosDate, DosTime};

    #[test]
    fn test_timestamp_format() {
        let mut date = DosDate::default();
        date.set_year(1980);
        date.set_month(1);
        date.set_day(1);
        let mut time = DosTime::default();
        time.set_second(30);
        assert_eq!(timestamp(&Timestamp { date, time }), "1/1/1980 0:00:30");
    }
}
