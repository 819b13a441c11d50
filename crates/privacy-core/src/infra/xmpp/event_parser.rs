// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use privacy_xmpp::{
    client::Event as XMPPClientEvent, mods::privacy::Event as XMPPPrivacyEvent, Event,
};

use crate::app::event_handlers::{
    ConnectionEvent, PrivacyListEvent, PrivacyListEventType, ServerEvent, XMPPEvent,
};

pub fn parse_xmpp_event(event: XMPPEvent) -> Result<Vec<ServerEvent>> {
    let mut ctx = Context::default();

    match event {
        Event::Client(event) => parse_client_event(&mut ctx, event)?,
        Event::Privacy(event) => parse_privacy_event(&mut ctx, event)?,
    };

    Ok(ctx.events)
}

#[derive(Debug, Default)]
struct Context {
    events: Vec<ServerEvent>,
}

impl Context {
    pub fn push_event(&mut self, event: impl Into<ServerEvent>) {
        self.events.push(event.into())
    }
}

fn parse_client_event(ctx: &mut Context, event: XMPPClientEvent) -> Result<()> {
    match event {
        XMPPClientEvent::Connected => ctx.push_event(ConnectionEvent::Connected),
        XMPPClientEvent::Disconnected { error } => {
            ctx.push_event(ConnectionEvent::Disconnected { error })
        }
    }

    Ok(())
}

fn parse_privacy_event(ctx: &mut Context, event: XMPPPrivacyEvent) -> Result<()> {
    match event {
        XMPPPrivacyEvent::ListChanged { name } => ctx.push_event(PrivacyListEvent {
            name,
            r#type: PrivacyListEventType::Changed,
        }),
    }

    Ok(())
}
