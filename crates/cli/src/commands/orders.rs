//! Order commands: checkout, history, payment.

use adstore_core::OrderId;
use adstore_store::models::CheckoutDetails;
use adstore_store::payment::{confirm_payment, payment_qr_url};

use super::Context;

/// Convert the cart into a pending order.
pub fn checkout(
    budget: Option<String>,
    message: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = Context::load()?;

    let order_id = ctx
        .cart
        .checkout(&mut ctx.session, CheckoutDetails { budget, message })?;

    println!("Заказ оформлен: {order_id}");
    println!("Для оплаты выполните: adstore pay {order_id}");
    Ok(())
}

/// List the signed-in user's orders, oldest first.
pub fn list() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load()?;
    if ctx.session.current_user().is_none() {
        return Err("Вы не вошли в систему".into());
    }

    let orders = ctx.session.orders();
    if orders.is_empty() {
        println!("Заказов пока нет");
        return Ok(());
    }

    for order in orders {
        println!(
            "{} · {} · {} ₽ · {}",
            order.id,
            order.created_at.format("%Y-%m-%d"),
            order.total_amount,
            order.status
        );
        for item in &order.items {
            println!("    {} × {} ({})", item.title, item.quantity, item.price_label);
        }
    }
    Ok(())
}

/// Show bank-transfer details for an order, or confirm the transfer.
pub fn pay(order_id: &str, proof: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let id = OrderId::new(order_id);
    let mut ctx = Context::load()?;

    match proof {
        Some(proof) => {
            confirm_payment(&mut ctx.session, &id, proof)?;
            println!("Оплата подтверждена! Мы проверим платеж и начнем работу над заказом.");
        }
        None => {
            let order = ctx
                .session
                .order(&id)
                .ok_or_else(|| format!("заказ {order_id} не найден"))?;

            println!("Заказ {} на сумму {} ₽", order.id, order.total_amount);
            println!(
                "Переведите точную сумму на карту {} ({})",
                ctx.config.payment.card_number, ctx.config.payment.card_holder
            );
            println!("QR-код: {}", payment_qr_url(order, &ctx.config.payment));
            println!("После перевода: adstore pay {order_id} --proof <номер операции>");
        }
    }
    Ok(())
}
