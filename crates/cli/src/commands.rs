use anyhow::{bail, Context};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use zone53_application::use_cases::{
    CreateRecordOptions, CreateRecordUseCase, DeleteRecordUseCase, ExportZoneUseCase,
    ImportOptions, ImportZoneUseCase, LookupZoneUseCase, PurgeRecordsUseCase,
};
use zone53_domain::{RecordType, ZoneInfo};
use zone53_infrastructure::directory::InMemoryZoneDirectory;
use zone53_infrastructure::zonefile::{parse_zone_text, write_zone_text};

async fn lookup(directory: &Arc<InMemoryZoneDirectory>, name_or_id: &str) -> anyhow::Result<ZoneInfo> {
    let use_case = LookupZoneUseCase::new(directory.clone());
    Ok(use_case.execute(name_or_id).await?)
}

pub async fn list(directory: Arc<InMemoryZoneDirectory>) -> anyhow::Result<()> {
    use zone53_application::ports::ZoneDirectory;
    for zone in directory.list_zones().await? {
        println!("{}\t{}", zone.id, zone.name);
    }
    Ok(())
}

pub async fn mkzone(directory: Arc<InMemoryZoneDirectory>, name: &str) -> anyhow::Result<()> {
    let zone = directory.create_zone(name);
    println!("Created zone: '{}' ID: '{}'", zone.name, zone.id);
    Ok(())
}

pub async fn import(
    directory: Arc<InMemoryZoneDirectory>,
    zone: &str,
    file: Option<&Path>,
    opts: &ImportOptions,
) -> anyhow::Result<()> {
    let zone = lookup(&directory, zone).await?;
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };
    let records = parse_zone_text(&text, &zone.name)?;

    let use_case = ImportZoneUseCase::new(directory.clone());
    let summary = use_case.execute(&zone, records, opts).await?;
    println!(
        "{} records imported ({} changes / {} additions / {} deletions)",
        summary.records, summary.changes, summary.creates, summary.deletes
    );
    Ok(())
}

pub async fn export(
    directory: Arc<InMemoryZoneDirectory>,
    zone: &str,
    full_names: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let zone = lookup(&directory, zone).await?;
    let use_case = ExportZoneUseCase::new(directory.clone());
    let records = use_case.execute(&zone, full_names).await?;
    let text = write_zone_text(&records, &zone.name, full_names);
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{}", text),
    }
    Ok(())
}

pub async fn rrcreate(
    directory: Arc<InMemoryZoneDirectory>,
    zone: &str,
    record: &[String],
    opts: &CreateRecordOptions,
) -> anyhow::Result<()> {
    let zone = lookup(&directory, zone).await?;
    let line = record.join(" ");
    let mut records = parse_zone_text(&line, &zone.name)?;
    if records.len() != 1 {
        bail!("expected exactly one record, got {}", records.len());
    }
    let record = records.remove(0);

    let use_case = CreateRecordUseCase::new(directory.clone());
    let set = use_case.execute(&zone, record, opts).await?;
    println!("Created record set: '{}' {}", set.name, set.rtype);
    Ok(())
}

pub async fn rrdelete(
    directory: Arc<InMemoryZoneDirectory>,
    zone: &str,
    name: &str,
    rtype: RecordType,
    identifier: Option<&str>,
    wait: bool,
) -> anyhow::Result<()> {
    let zone = lookup(&directory, zone).await?;
    let use_case = DeleteRecordUseCase::new(directory.clone());
    let deleted = use_case.execute(&zone, name, rtype, identifier, wait).await?;
    println!("{} record sets deleted", deleted);
    Ok(())
}

pub async fn rrpurge(
    directory: Arc<InMemoryZoneDirectory>,
    zone: &str,
    confirm: bool,
    wait: bool,
) -> anyhow::Result<()> {
    if !confirm {
        bail!("rrpurge deletes every non-authoritative record set; rerun with --confirm");
    }
    let zone = lookup(&directory, zone).await?;
    let use_case = PurgeRecordsUseCase::new(directory.clone());
    let deleted = use_case.execute(&zone, wait).await?;
    println!("{} record sets deleted", deleted);
    Ok(())
}
