//! Route publication and sender-transporter messaging workflow.

use chrono::{Duration, Utc};
use marketplace::models::{CreateReview, CreateRoute, RouteStatus, UpdateRoute};
use rust_decimal::Decimal;
use workflow_tests::WorkflowTestContext;

#[tokio::test]
async fn sender_contacts_transporter_about_a_route() {
    let ctx = WorkflowTestContext::new().await.unwrap();

    let departure = Utc::now() + Duration::days(10);
    let route = ctx
        .directory
        .create_route(CreateRoute {
            transporter_id: ctx.transporter.user_id,
            origin: "paris".to_string(),
            destination: "abidjan".to_string(),
            departure_utc: departure,
            arrival_utc: departure + Duration::hours(7),
            capacity_kg: 18.0,
            price_per_kg: Decimal::from(5_500),
        })
        .await
        .unwrap();
    assert_eq!(route.status, RouteStatus::Open);

    let conversation = ctx
        .directory
        .open_conversation(vec![ctx.sender.user_id, ctx.transporter.user_id])
        .await
        .unwrap();

    ctx.directory
        .send_message(
            conversation.conversation_id,
            ctx.sender.user_id,
            format!("Is there room for 5kg on {}?", route.destination),
        )
        .await
        .unwrap();
    ctx.directory
        .send_message(
            conversation.conversation_id,
            ctx.transporter.user_id,
            "Yes, plenty.".to_string(),
        )
        .await
        .unwrap();

    let messages = ctx
        .directory
        .list_messages(conversation.conversation_id)
        .await
        .unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender_id, ctx.sender.user_id);

    // Capacity agreed, the transporter closes the route.
    let closed = ctx
        .directory
        .update_route(
            route.route_id,
            UpdateRoute {
                status: Some(RouteStatus::Full),
                ..UpdateRoute::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(closed.status, RouteStatus::Full);
}

#[tokio::test]
async fn delivered_shipment_earns_the_transporter_a_review() {
    let ctx = WorkflowTestContext::new().await.unwrap();

    ctx.directory
        .create_review(CreateReview {
            author_id: ctx.sender.user_id,
            subject_id: ctx.transporter.user_id,
            package_id: None,
            rating: 5,
            comment: "Arrived early, great communication.".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(
        ctx.directory
            .average_rating_for_subject(ctx.transporter.user_id)
            .await
            .unwrap(),
        Some(5.0)
    );
}
