// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use insta::assert_snapshot;
use minidom::{Element, Node};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use secrecy::Secret;

use privacy_core::dtos::{Contact, PrivacyList};
use privacy_core::{user_id, AppConfig, Client, ClientDelegate, ClientEvent, ConnectionEvent};
use privacy_xmpp::test::{Connection, Connector};
use privacy_xmpp::{full, ns};

/// A minimal server which answers disco#info, roster and privacy list requests.
struct Server {
    supports_privacy_lists: bool,
    lists: BTreeMap<String, Element>,
    active: Option<String>,
    default: Option<String>,
}

impl Server {
    fn new(supports_privacy_lists: bool) -> Self {
        let work_list = Element::builder("list", ns::PRIVACY)
            .attr("name", "work")
            .append(
                Element::builder("item", ns::PRIVACY)
                    .attr("type", "jid")
                    .attr("value", "boss@prose.org")
                    .attr("action", "deny")
                    .attr("order", "1")
                    .append(Element::builder("presence-out", ns::PRIVACY).build())
                    .build(),
            )
            .append(
                Element::builder("item", ns::PRIVACY)
                    .attr("action", "allow")
                    .attr("order", "999999")
                    .build(),
            )
            .build();

        Server {
            supports_privacy_lists,
            lists: BTreeMap::from([("work".to_string(), work_list)]),
            active: None,
            default: Some("work".to_string()),
        }
    }

    fn handle_stanza(&mut self, stanza: &Element) -> Vec<Element> {
        if !stanza.is("iq", ns::DEFAULT_NS) {
            return vec![];
        }

        let id = stanza.attr("id").unwrap_or_default().to_string();
        let is_set = stanza.attr("type") == Some("set");
        let Some(query) = stanza.children().next() else {
            return vec![];
        };

        let response = if query.is("query", ns::DISCO_INFO) {
            Some(self.disco_info())
        } else if query.is("query", ns::ROSTER) {
            Some(roster())
        } else if query.is("query", ns::PRIVACY) && is_set {
            if !self.apply_privacy_set(query) {
                return vec![item_not_found(&id)];
            }
            None
        } else if query.is("query", ns::PRIVACY) {
            match query.get_child("list", ns::PRIVACY).and_then(|l| l.attr("name")) {
                Some(name) => match self.lists.get(name) {
                    Some(list) => Some(
                        Element::builder("query", ns::PRIVACY)
                            .append(list.clone())
                            .build(),
                    ),
                    None => return vec![item_not_found(&id)],
                },
                None => Some(self.list_names()),
            }
        } else {
            None
        };

        vec![Element::builder("iq", ns::DEFAULT_NS)
            .attr("type", "result")
            .attr("id", id)
            .append_all(response)
            .build()]
    }

    fn disco_info(&self) -> Element {
        let mut features = vec![ns::DISCO_INFO];
        if self.supports_privacy_lists {
            features.push(ns::PRIVACY);
        }

        Element::builder("query", ns::DISCO_INFO)
            .append(
                Element::builder("identity", ns::DISCO_INFO)
                    .attr("category", "server")
                    .attr("type", "im")
                    .build(),
            )
            .append_all(features.into_iter().map(|feature| {
                Element::builder("feature", ns::DISCO_INFO)
                    .attr("var", feature)
                    .build()
            }))
            .build()
    }

    fn list_names(&self) -> Element {
        let selection = |name: &str, value: &Option<String>| {
            value.as_ref().map(|value| {
                Element::builder(name, ns::PRIVACY)
                    .attr("name", value.as_str())
                    .build()
            })
        };

        Element::builder("query", ns::PRIVACY)
            .append_all(selection("active", &self.active))
            .append_all(selection("default", &self.default))
            .append_all(self.lists.keys().map(|name| {
                Element::builder("list", ns::PRIVACY)
                    .attr("name", name.as_str())
                    .build()
            }))
            .build()
    }

    /// Returns `false` if the request refers to an unknown list.
    fn apply_privacy_set(&mut self, query: &Element) -> bool {
        for child in query.children() {
            let name = child.attr("name").map(ToString::to_string);
            let is_known_list = name
                .as_ref()
                .map(|name| self.lists.contains_key(name))
                .unwrap_or(true);

            match child.name() {
                "active" | "default" if !is_known_list => return false,
                "active" => self.active = name,
                "default" => self.default = name,
                "list" => {
                    let Some(name) = name else { continue };
                    if child.children().next().is_none() {
                        self.lists.remove(&name);
                    } else {
                        self.lists.insert(name, child.clone());
                    }
                }
                _ => (),
            }
        }
        true
    }
}

fn roster() -> Element {
    Element::builder("query", ns::ROSTER)
        .append(
            Element::builder("item", ns::ROSTER)
                .attr("jid", "boss@prose.org")
                .attr("subscription", "both")
                .append(
                    Element::builder("group", ns::ROSTER)
                        .append(Node::Text("Work".to_string()))
                        .build(),
                )
                .build(),
        )
        .append(
            Element::builder("item", ns::ROSTER)
                .attr("jid", "mum@prose.org")
                .attr("subscription", "both")
                .build(),
        )
        .build()
}

fn item_not_found(id: &str) -> Element {
    Element::builder("iq", ns::DEFAULT_NS)
        .attr("type", "error")
        .attr("id", id)
        .append(
            Element::builder("error", ns::DEFAULT_NS)
                .attr("type", "cancel")
                .append(Element::builder("item-not-found", ns::XMPP_STANZAS).build())
                .build(),
        )
        .build()
}

#[derive(Default)]
struct EventRecorder {
    events: Mutex<Vec<ClientEvent>>,
}

impl ClientDelegate for EventRecorder {
    fn handle_event(&self, _client: Client, event: ClientEvent) {
        self.events.lock().push(event)
    }
}

struct TestClient {
    client: Client,
    connection: Arc<Connection>,
    server: Arc<Mutex<Server>>,
    recorder: Arc<EventRecorder>,
}

impl TestClient {
    async fn connected(supports_privacy_lists: bool) -> Result<Self> {
        let connection = Arc::new(Connection::default());
        let server = Arc::new(Mutex::new(Server::new(supports_privacy_lists)));
        let recorder = Arc::new(EventRecorder::default());

        {
            let server = server.clone();
            connection.set_stanza_handler(move |stanza| server.lock().handle_stanza(stanza));
        }

        let client = Client::builder()
            .set_connector_provider(Connector::provider(connection.clone()))
            .set_config(AppConfig {
                request_timeout: Duration::from_secs(2),
                ..Default::default()
            })
            .add_delegate(recorder.clone())
            .build();

        client
            .connect(
                &full!("jane.doe@prose.org/macOS"),
                Secret::new("my-password".to_string()),
            )
            .await?;

        Ok(TestClient {
            client,
            connection,
            server,
            recorder,
        })
    }

    fn presences(&self) -> Vec<(Option<String>, Option<String>)> {
        self.connection
            .sent_stanzas()
            .into_iter()
            .filter(|stanza| stanza.is("presence", ns::DEFAULT_NS))
            .map(|stanza| {
                (
                    stanza.attr("to").map(ToString::to_string),
                    stanza.attr("type").map(ToString::to_string),
                )
            })
            .collect()
    }

    fn sent_privacy_requests(&self) -> usize {
        self.connection
            .sent_stanzas()
            .into_iter()
            .filter(|stanza| stanza.has_child("query", ns::PRIVACY))
            .count()
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_connect_applies_default_list() -> Result<()> {
    let test_client = TestClient::connected(true).await?;
    let client = &test_client.client;

    assert!(client.privacy.is_privacy_active().await);
    assert_eq!(
        client.privacy.get_active_list().await.map(|l| l.name),
        Some("work".to_string())
    );
    assert_eq!(
        client.privacy.get_default_list().await.map(|l| l.name),
        Some("work".to_string())
    );

    assert_eq!(
        client.contact_list.load_contacts().await?,
        vec![
            Contact {
                id: user_id!("boss@prose.org"),
                name: None,
                groups: vec!["Work".to_string()],
                is_blocked: true,
            },
            Contact {
                id: user_id!("mum@prose.org"),
                name: None,
                groups: vec![],
                is_blocked: false,
            },
        ]
    );

    // Our initial broadcast, then the directed unavailable presence to the blocked contact.
    assert_eq!(
        test_client.presences(),
        vec![
            (None, None),
            (
                Some("boss@prose.org".to_string()),
                Some("unavailable".to_string())
            ),
        ]
    );

    assert_eq!(
        test_client.recorder.events.lock().clone(),
        vec![
            ClientEvent::ContactChanged {
                ids: vec![user_id!("boss@prose.org")]
            },
            ClientEvent::PrivacyListsChanged,
            ClientEvent::ConnectionStatusChanged {
                event: ConnectionEvent::Connect
            },
        ]
    );

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_invisibility_round_trip() -> Result<()> {
    let test_client = TestClient::connected(true).await?;
    let client = &test_client.client;
    test_client.connection.reset();

    assert!(client.privacy.go_to_invisible().await);

    assert!(client.privacy.is_globally_invisible_list_active().await);
    assert_eq!(
        test_client.server.lock().active,
        Some("invisible".to_string())
    );
    assert!(test_client.server.lock().lists.contains_key("invisible"));
    assert_eq!(
        client
            .privacy
            .get_privacy_lists()
            .await
            .into_iter()
            .map(|l| l.name)
            .collect::<Vec<_>>(),
        vec!["work".to_string()]
    );

    // Unavailable broadcast, the boss is unblocked since the work list is no longer active,
    // then our presence which the server now filters.
    assert_eq!(
        test_client.presences(),
        vec![
            (None, Some("unavailable".to_string())),
            (Some("boss@prose.org".to_string()), None),
            (None, None),
        ]
    );
    assert!(!client.privacy.is_contact_blocked(&user_id!("boss@prose.org")));

    test_client.connection.reset();
    assert!(client.privacy.go_to_visible().await);

    assert!(!client.privacy.is_globally_invisible_list_active().await);
    assert_eq!(test_client.server.lock().active, Some("work".to_string()));
    assert_eq!(
        client.privacy.get_active_list().await.map(|l| l.name),
        Some("work".to_string())
    );
    assert!(client.privacy.is_contact_blocked(&user_id!("boss@prose.org")));
    assert_eq!(
        test_client.presences(),
        vec![
            (None, None),
            (
                Some("boss@prose.org".to_string()),
                Some("unavailable".to_string())
            ),
        ]
    );

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_manages_lists() -> Result<()> {
    let test_client = TestClient::connected(true).await?;
    let client = &test_client.client;
    test_client.connection.reset();

    let list = client.privacy.get_privacy_list("friends").await;
    assert_eq!(list, Some(PrivacyList::catch_all("friends", 999999)));
    assert!(test_client.server.lock().lists.contains_key("friends"));

    let sent_stanzas = test_client.connection.sent_stanzas();
    assert_eq!(sent_stanzas.len(), 1);
    let query = sent_stanzas[0]
        .get_child("query", ns::PRIVACY)
        .map(String::from)
        .unwrap_or_default();
    assert_snapshot!(query, @r###"<query xmlns='jabber:iq:privacy'><list name="friends"><item action="allow" order="999999"/></list></query>"###);

    assert!(client.privacy.set_list_as_default("friends").await);
    assert_eq!(test_client.server.lock().default, Some("friends".to_string()));

    assert!(client.privacy.remove_privacy_list("friends").await);
    assert!(!test_client.server.lock().lists.contains_key("friends"));
    assert_eq!(
        client
            .privacy
            .get_privacy_lists()
            .await
            .into_iter()
            .map(|l| l.name)
            .collect::<Vec<_>>(),
        vec!["work".to_string()]
    );

    // The server doesn't know this list.
    assert!(!client.privacy.set_list_as_active("unknown").await);
    assert_eq!(
        client.privacy.get_active_list().await.map(|l| l.name),
        Some("work".to_string())
    );

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_privacy_is_inactive_without_server_support() -> Result<()> {
    let test_client = TestClient::connected(false).await?;
    let client = &test_client.client;

    assert!(!client.privacy.is_privacy_active().await);
    assert!(client.privacy.get_privacy_lists().await.is_empty());
    assert!(client.privacy.go_to_invisible().await);
    assert!(!client.privacy.is_globally_invisible_list_active().await);

    assert_eq!(test_client.sent_privacy_requests(), 0);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_disconnect_resets_session() -> Result<()> {
    let test_client = TestClient::connected(true).await?;
    let client = &test_client.client;

    client.disconnect().await?;

    assert_eq!(client.connected_jid(), None);
    assert!(client.privacy.blocked_contacts().is_empty());

    Ok(())
}
