use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::format_contact_line;
use anyhow::{Context as _, Result};
use clap::Args;
use dialbook_core::Contact;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {}

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub query: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Phone number, or a name to remove every contact with that name
    pub identifier: String,
}

#[derive(Debug, Serialize)]
struct DeleteReport {
    deleted: bool,
    remaining: usize,
}

pub fn add_contact(ctx: &mut Context<'_>, args: AddArgs) -> Result<()> {
    let contact = ctx.store.add(&args.name, &args.phone)?.clone();
    save(ctx)?;

    if ctx.json {
        print_json(&contact)?;
    } else {
        println!(
            "added {} {}",
            contact.phone.as_deref().unwrap_or_default(),
            contact.name
        );
    }
    Ok(())
}

pub fn list_contacts(ctx: &Context<'_>, _args: ListArgs) -> Result<()> {
    print_contacts(ctx, ctx.store.list())
}

pub fn search_contacts(ctx: &Context<'_>, args: SearchArgs) -> Result<()> {
    print_contacts(ctx, ctx.store.search(&args.query))
}

pub fn delete_contact(ctx: &mut Context<'_>, args: DeleteArgs) -> Result<()> {
    if args.identifier.trim().is_empty() {
        return Err(invalid_input("phone or name cannot be empty"));
    }
    if !ctx.store.delete(&args.identifier) {
        return Err(not_found(format!(
            "no contact matches {:?}",
            args.identifier.trim()
        )));
    }
    save(ctx)?;

    if ctx.json {
        print_json(&DeleteReport {
            deleted: true,
            remaining: ctx.store.len(),
        })?;
    } else {
        println!("deleted {}", args.identifier.trim());
    }
    Ok(())
}

fn print_contacts<'a>(ctx: &Context<'_>, contacts: impl Iterator<Item = &'a Contact>) -> Result<()> {
    if ctx.json {
        let items: Vec<&Contact> = contacts.collect();
        return print_json(&items);
    }

    for contact in contacts {
        println!("{}", format_contact_line(contact));
    }
    Ok(())
}

fn save(ctx: &Context<'_>) -> Result<()> {
    ctx.store
        .save(ctx.data_path)
        .with_context(|| format!("save contacts to {}", ctx.data_path.display()))?;
    debug!(count = ctx.store.len(), "store persisted");
    Ok(())
}
