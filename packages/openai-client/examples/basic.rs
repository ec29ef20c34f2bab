//! Basic OpenAI client usage example

use openai_client::{ChatRequest, ImageRequest, Message, OpenAIClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = OpenAIClient::from_env()?;

    // Simple chat completion
    println!("=== Chat Completion ===");
    let response = client
        .chat_completion(
            ChatRequest::new("gpt-3.5-turbo")
                .message(Message::system("You are a helpful cook."))
                .message(Message::user("Name one dish that uses mango, in one line."))
                .temperature(0.7)
                .max_tokens(50),
        )
        .await?;

    println!("Response: {}", response.content);

    // Image generation
    println!("\n=== Image Generation ===");
    let images = client
        .create_image(ImageRequest::new("dall-e-3", response.content.trim()))
        .await?;

    match images.first_url() {
        Some(url) => println!("Image URL: {}", url),
        None => println!("No image URL returned"),
    }

    Ok(())
}
