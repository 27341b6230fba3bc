use spendify_advisory::{
    config::AdvisoryConfig,
    gateway::AdvisoryGateway,
    tools::{BudgetTool, CategorizerTool, ChatTool},
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    dotenv::dotenv().ok();

    info!("Spendify Advisory demo starting");

    let config = AdvisoryConfig::from_env();
    if !config.has_provider() {
        info!("No GEMINI_API_KEY configured; running against local fallbacks");
    }

    let gateway = Arc::new(AdvisoryGateway::from_config(&config));

    // Budget generator
    let mut budget = BudgetTool::new(gateway.clone());
    budget.set_input("5000");
    budget.submit().await;

    println!("\n=== BUDGET GENERATOR ===");
    match (&budget.state().result, &budget.state().error) {
        (Some(items), _) => {
            for item in items {
                println!("  {:<16} ${:.2}", item.category, item.allocated);
            }
        }
        (_, Some(message)) => println!("  {}", message),
        _ => {}
    }

    // Expense categorizer
    let mut categorizer = CategorizerTool::new(gateway.clone());
    categorizer.set_input("Coffee at Starbucks");
    categorizer.submit().await;

    println!("\n=== EXPENSE CATEGORIZER ===");
    match (&categorizer.state().result, &categorizer.state().error) {
        (Some(category), _) => println!("  Coffee at Starbucks -> {}", category),
        (_, Some(message)) => println!("  {}", message),
        _ => {}
    }

    // Advisor chat
    let mut chat = ChatTool::new(gateway);
    chat.set_input("How do I save more?");
    chat.submit().await;

    println!("\n=== ADVISOR CHAT ===");
    for msg in chat.history() {
        println!("  [{}] {}", msg.sender, msg.text);
    }
    if let Some(message) = &chat.state().error {
        println!("  {}", message);
    }

    Ok(())
}
