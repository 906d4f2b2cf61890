//! Cart commands.

use adstore_core::ServiceId;

use super::Context;

/// Print the cart contents and totals.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load()?;

    if ctx.cart.is_empty() {
        println!("Корзина пуста");
        return Ok(());
    }

    for item in ctx.cart.items() {
        println!(
            "#{} {} × {} ({})",
            item.service_id, item.title, item.quantity, item.price
        );
    }
    println!(
        "Итого: {} позиций, {} ₽",
        ctx.cart.total_item_count(),
        ctx.cart.total_price()
    );
    Ok(())
}

/// Add a catalog service to the cart.
pub fn add(service_id: u32) -> Result<(), Box<dyn std::error::Error>> {
    let id = ServiceId::new(service_id);
    let mut ctx = Context::load()?;

    let service = ctx
        .catalog
        .get(id)
        .ok_or_else(|| format!("нет услуги с id {service_id}"))?;
    ctx.cart.add(service)?;

    println!("Добавлено: {}", service.title);
    Ok(())
}

/// Remove a line from the cart.
pub fn remove(service_id: u32) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = Context::load()?;
    ctx.cart.remove(ServiceId::new(service_id))?;
    println!("Удалено из корзины");
    Ok(())
}

/// Overwrite a line's quantity; zero removes the line.
pub fn set_quantity(service_id: u32, quantity: u32) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = Context::load()?;
    ctx.cart.set_quantity(ServiceId::new(service_id), quantity)?;
    println!("Количество обновлено");
    Ok(())
}
