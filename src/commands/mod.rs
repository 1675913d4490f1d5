//! Command handlers: call the service, print the result, report notices.
//!
//! Results go to stdout; notices always go to stderr.

use git_persona::{GitRunner, Identity, IdentityService, Notice, ProfileStore, Scope};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

#[derive(Serialize)]
struct ListView {
    current: Identity,
    identities: Vec<Identity>,
}

#[derive(Serialize)]
struct AppliedView {
    identity: Identity,
    scope: Scope,
}

fn emit(notices: &[Notice]) {
    for notice in notices {
        eprintln!("{notice}");
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("{}", Notice::error(format!("Failed to encode output: {e}"))),
    }
}

/// `current`: never fails; problems come back as notices.
pub async fn current<S: ProfileStore, G: GitRunner>(
    service: &IdentityService<S, G>,
    output: Output,
) -> bool {
    let resolution = service.resolve_current_identity().await;
    emit(&resolution.notices);
    if output.json {
        print_json(&resolution);
    } else {
        println!("{}", resolution.identity.display_label());
    }
    true
}

pub async fn list<S: ProfileStore, G: GitRunner>(
    service: &IdentityService<S, G>,
    output: Output,
) -> bool {
    let resolution = service.resolve_current_identity().await;
    emit(&resolution.notices);
    let known = service.list_known_identities().await;

    if output.json {
        print_json(&ListView {
            current: resolution.identity,
            identities: known,
        });
    } else {
        for (position, identity) in (1_usize..).zip(&known) {
            let marker = if *identity == resolution.identity { '*' } else { ' ' };
            println!("{marker} {position:>2}. {}", identity.display_label());
        }
    }
    true
}

pub async fn use_known<S: ProfileStore, G: GitRunner>(
    service: &IdentityService<S, G>,
    index: usize,
    scope: Scope,
    output: Output,
) -> bool {
    let Some(identity) = service.known_identity_at(index).await else {
        emit(&[Notice::error(format!(
            "There is no identity #{index}; run `git-persona list` to see the known identities"
        ))]);
        return false;
    };
    apply(service, &identity, scope, output).await
}

pub async fn add<S: ProfileStore, G: GitRunner>(
    service: &IdentityService<S, G>,
    name: String,
    email: String,
    scope: Scope,
    output: Output,
) -> bool {
    apply(service, &Identity::new(name, email), scope, output).await
}

async fn apply<S: ProfileStore, G: GitRunner>(
    service: &IdentityService<S, G>,
    identity: &Identity,
    scope: Scope,
    output: Output,
) -> bool {
    match service.apply_identity(identity, scope).await {
        Ok(applied) => {
            if output.json {
                print_json(&AppliedView {
                    identity: applied,
                    scope,
                });
            } else {
                println!("{}", Notice::applied(&applied, scope).message);
            }
            true
        }
        Err(e) => {
            emit(&[Notice::from(&e)]);
            false
        }
    }
}
