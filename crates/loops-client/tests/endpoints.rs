/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Mailing list, event, transactional, property and account endpoints

mod common;

use common::{anonymous_client_for, client_for, request_count};
use loops_client::{
  ContactPropertyCreate, EmailAttachment, Event, ListTransactionalOptions, PropertyFilter, PropertyType,
  RequestContext, TransactionalEmail,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_mailing_lists() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/api/v1/lists"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
      {"id": "cm3n274xf027h0mi33t4qhrdg", "name": "Newsletter", "description": null, "isPublic": true}
    ])))
    .expect(1)
    .mount(&server)
    .await;

  let lists = client_for(&server).mailing_lists().list(&RequestContext::new()).await.unwrap();
  assert_eq!(lists.len(), 1);
  assert_eq!(lists[0].id, "cm3n274xf027h0mi33t4qhrdg");
  assert_eq!(lists[0].name, "Newsletter");
  assert!(lists[0].is_public);
}

#[tokio::test]
async fn test_send_event() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/api/v1/events/send"))
    .and(body_json(json!({
      "email": "neil.armstrong@moon.space",
      "eventName": "joinedMission",
      "eventProperties": {"mission": "Apollo 11"}
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
    .expect(1)
    .mount(&server)
    .await;

  let event =
    Event::for_email("joinedMission", "neil.armstrong@moon.space").with_event_property("mission", "Apollo 11");
  client_for(&server).events().send(&RequestContext::new(), &event).await.unwrap();
}

#[tokio::test]
async fn test_send_event_identity_validation() {
  let server = MockServer::start().await;
  let client = client_for(&server);
  let ctx = RequestContext::new();

  let anonymous = Event { event_name: "joinedMission".to_string(), ..Event::default() };
  assert!(client.events().send(&ctx, &anonymous).await.unwrap_err().is_validation());

  let both = Event { user_id: Some("user_123".to_string()), ..Event::for_email("joinedMission", "a@b.c") };
  assert!(client.events().send(&ctx, &both).await.unwrap_err().is_validation());

  assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_send_transactional_email() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/api/v1/transactional"))
    .and(body_json(json!({
      "transactionalId": "cm3n2vjux00cgeyeflew9ly2w",
      "email": "test@example.com",
      "dataVariables": {"name": "Mr. Test"},
      "attachments": [{"filename": "hello.txt", "contentType": "text/plain", "data": "aGVsbG8="}]
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
    .expect(1)
    .mount(&server)
    .await;

  let email = TransactionalEmail::new("cm3n2vjux00cgeyeflew9ly2w", "test@example.com")
    .with_data_variable("name", "Mr. Test")
    .with_attachment(EmailAttachment {
      filename: "hello.txt".to_string(),
      content_type: "text/plain".to_string(),
      data: "aGVsbG8=".to_string(),
    });
  client_for(&server).transactional().send(&RequestContext::new(), &email).await.unwrap();
}

#[tokio::test]
async fn test_list_transactional_emails() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/api/v1/transactional"))
    .and(query_param("perPage", "10"))
    .and(query_param("cursor", "clyo0q4wo01p59fsecyxqsh38"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "pagination": {"totalResults": 11, "returnedResults": 1, "perPage": 10, "totalPages": 2, "nextCursor": null, "nextPage": null},
      "data": [{"id": "clfn0k1yg001imo0fdeqg30i8", "name": "Welcome", "lastUpdated": "2024-11-06T17:48:07.249Z", "dataVariables": []}]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let options =
    ListTransactionalOptions { per_page: Some(10), cursor: Some("clyo0q4wo01p59fsecyxqsh38".to_string()) };
  let page = client_for(&server).transactional().list(&RequestContext::new(), &options).await.unwrap();

  assert_eq!(page.pagination.total_results, 11);
  assert_eq!(page.pagination.next_cursor, None);
  assert_eq!(page.data.len(), 1);
  assert_eq!(page.data[0].name, "Welcome");
}

#[tokio::test]
async fn test_list_transactional_defaults_send_no_paging() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/api/v1/transactional"))
    .and(query_param_is_missing("perPage"))
    .and(query_param_is_missing("cursor"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pagination": {}, "data": []})))
    .expect(1)
    .mount(&server)
    .await;

  let page =
    client_for(&server).transactional().list(&RequestContext::new(), &ListTransactionalOptions::default()).await.unwrap();
  assert!(page.data.is_empty());
}

#[tokio::test]
async fn test_list_transactional_per_page_bounds() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/api/v1/transactional"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pagination": {}, "data": []})))
    .mount(&server)
    .await;

  let client = client_for(&server);
  let ctx = RequestContext::new();

  for per_page in [5, 60] {
    let options = ListTransactionalOptions { per_page: Some(per_page), cursor: None };
    assert!(client.transactional().list(&ctx, &options).await.unwrap_err().is_validation());
  }
  assert_eq!(request_count(&server).await, 0);

  let options = ListTransactionalOptions { per_page: Some(20), cursor: None };
  assert!(client.transactional().list(&ctx, &options).await.is_ok());
  assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_list_contact_properties() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/api/v1/contacts/properties"))
    .and(query_param("list", "custom"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
      {"key": "role", "label": "Role", "type": "string"}
    ])))
    .expect(1)
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/api/v1/contacts/properties"))
    .and(query_param_is_missing("list"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
      {"key": "firstName", "label": "First Name", "type": "string"},
      {"key": "subscribed", "label": "Subscribed", "type": "boolean"},
      {"key": "role", "label": "Role", "type": "string"}
    ])))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  let ctx = RequestContext::new();

  let custom = client.properties().list(&ctx, PropertyFilter::Custom).await.unwrap();
  assert_eq!(custom.len(), 1);
  assert_eq!(custom[0].key, "role");
  assert_eq!(custom[0].label, "Role");
  assert_eq!(custom[0].property_type, PropertyType::String);

  let all = client.properties().list(&ctx, PropertyFilter::All).await.unwrap();
  assert_eq!(all.len(), 3);
  assert_eq!(all[1].property_type, PropertyType::Boolean);
}

#[tokio::test]
async fn test_create_contact_property() {
  let server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/api/v1/contacts/properties"))
    .and(body_json(json!({"name": "planName", "type": "string"})))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
    .expect(1)
    .mount(&server)
    .await;

  let property = ContactPropertyCreate { name: "planName".to_string(), property_type: PropertyType::String };
  client_for(&server).properties().create(&RequestContext::new(), &property).await.unwrap();
}

#[tokio::test]
#[allow(deprecated)]
async fn test_legacy_custom_fields() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/api/v1/contacts/customFields"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([
      {"key": "role", "label": "Role", "type": "string"}
    ])))
    .expect(1)
    .mount(&server)
    .await;

  let fields = client_for(&server).properties().custom_fields(&RequestContext::new()).await.unwrap();
  assert_eq!(fields.len(), 1);
  assert_eq!(fields[0].key, "role");
}

#[tokio::test]
async fn test_dedicated_sending_ips() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/api/v1/dedicated-sending-ips"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!(["1.2.3.4", "5.6.7.8"])))
    .expect(1)
    .mount(&server)
    .await;

  let ips = client_for(&server).account().dedicated_sending_ips(&RequestContext::new()).await.unwrap();
  assert_eq!(ips, vec!["1.2.3.4".to_string(), "5.6.7.8".to_string()]);
}

#[tokio::test]
async fn test_api_key() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/api/v1/api-key"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "teamName": "Tilebox Staging"})))
    .expect(1)
    .mount(&server)
    .await;

  let info = client_for(&server).account().test_api_key(&RequestContext::new()).await.unwrap();
  assert_eq!(info.team_name, "Tilebox Staging");
}

#[tokio::test]
async fn test_api_key_invalid() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/api/v1/api-key"))
    .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid API key"})))
    .expect(1)
    .mount(&server)
    .await;

  let err = anonymous_client_for(&server).account().test_api_key(&RequestContext::new()).await.unwrap_err();
  assert!(err.is_remote());
  assert!(err.to_string().contains("Invalid API key"));

  let requests = server.received_requests().await.unwrap();
  assert!(requests[0].headers.get("authorization").is_none());
}
